//! # Listener component: blocking serve loop with bounded graceful shutdown.
//!
//! A [`Listener`]'s `serve` call is not cancellation-aware, so
//! [`ListenerComponent`] isolates it on its own task and pipes its terminal
//! result back through a single-slot channel. The control logic then races
//! two events:
//!
//! ```text
//! run(ctx)
//!   ├─► spawn: tx.send(listener.serve().await)
//!   └─► select!
//!         ├─ ctx.cancelled()  ──► timeout(grace, listener.shutdown())
//!         │                         ├─ Ok        → clean Outcome
//!         │                         └─ Err/late  → ShutdownFailed event,
//!         │                                        STILL a clean Outcome
//!         └─ rx (serve result) ──► Err → Operation error (group cancels)
//!                                  Ok  → clean Outcome
//! ```
//!
//! ## Rules
//! - The grace window runs on its own clock; it is **not** cancellable by the
//!   same token that triggered it.
//! - A graceful close in progress makes the blocked `serve` return an
//!   expected "closed" result. Once the cancellation branch is taken, the
//!   serve result is discarded with the dropped receiver, so an
//!   operator-initiated close can never surface as a false failure.
//! - Shutdown errors are published for operability and never become the
//!   component's Outcome.

use std::borrow::Cow;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::components::Component;
use crate::error::ComponentError;
use crate::events::{Bus, Event, EventKind};

/// Default grace window for a cancellation-triggered close.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(10);

/// # Blocking accept-and-serve collaborator.
///
/// The boundary this component wraps. Implementations bind inside `serve`,
/// so bind failures surface through the serve result.
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Serves until stopped or faulted.
    async fn serve(&self) -> io::Result<()>;

    /// Stops accepting new work and waits for in-flight work to drain.
    ///
    /// The caller bounds this with the grace window; implementations need no
    /// internal deadline.
    async fn shutdown(&self) -> io::Result<()>;
}

/// Wraps a [`Listener`] with cooperative, bounded-time graceful shutdown.
pub struct ListenerComponent<L> {
    label: Cow<'static, str>,
    listener: Arc<L>,
    grace: Duration,
    bus: Option<Bus>,
}

impl<L: Listener> ListenerComponent<L> {
    /// Creates a listener component with the default 10 s grace window.
    pub fn new(label: impl Into<Cow<'static, str>>, listener: L) -> Self {
        Self {
            label: label.into(),
            listener: Arc::new(listener),
            grace: DEFAULT_GRACE,
            bus: None,
        }
    }

    /// Overrides the grace window.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Attaches an event bus so graceful-close failures are observable.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Runs the graceful close under the grace window.
    ///
    /// Failures and overruns are published as [`EventKind::ShutdownFailed`];
    /// the caller still reports a clean Outcome either way.
    async fn close_with_grace(&self) {
        let reason = match tokio::time::timeout(self.grace, self.listener.shutdown()).await {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!("graceful close still pending after {:?}", self.grace),
        };

        let err = ComponentError::Shutdown {
            component: self.label.to_string(),
            grace: self.grace,
            reason,
        };
        if let Some(bus) = &self.bus {
            bus.publish(
                Event::new(EventKind::ShutdownFailed)
                    .with_component(self.label.to_string())
                    .with_reason(err.to_string()),
            );
        }
    }
}

#[async_trait]
impl<L: Listener> Component for ListenerComponent<L> {
    fn label(&self) -> &str {
        &self.label
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError> {
        let (tx, rx) = oneshot::channel();
        let listener = Arc::clone(&self.listener);
        tokio::spawn(async move {
            // Receiver may be gone if the cancellation branch won; the late
            // "closed" result is intentionally discarded.
            let _ = tx.send(listener.serve().await);
        });

        tokio::select! {
            _ = ctx.cancelled() => {
                self.close_with_grace().await;
                Ok(())
            }
            res = rx => match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ComponentError::Operation {
                    component: self.label.to_string(),
                    source: e,
                }),
                Err(_) => Err(ComponentError::Operation {
                    component: self.label.to_string(),
                    source: io::Error::other("serve task dropped its result"),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    /// Serves until told to stop; records whether shutdown ran.
    struct FakeListener {
        stop: Notify,
        shutdown_called: AtomicBool,
    }

    impl FakeListener {
        fn new() -> Self {
            Self {
                stop: Notify::new(),
                shutdown_called: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl Listener for FakeListener {
        async fn serve(&self) -> io::Result<()> {
            self.stop.notified().await;
            Ok(())
        }

        async fn shutdown(&self) -> io::Result<()> {
            self.shutdown_called.store(true, Ordering::Relaxed);
            self.stop.notify_one();
            Ok(())
        }
    }

    /// Fails to serve immediately, as a bind error would.
    struct BindFailure;

    #[async_trait]
    impl Listener for BindFailure {
        async fn serve(&self) -> io::Result<()> {
            Err(io::Error::new(
                io::ErrorKind::AddrInUse,
                "address already in use",
            ))
        }

        async fn shutdown(&self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Drains far longer than any reasonable grace window.
    struct SlowDrain {
        stop: Notify,
    }

    #[async_trait]
    impl Listener for SlowDrain {
        async fn serve(&self) -> io::Result<()> {
            self.stop.notified().await;
            Ok(())
        }

        async fn shutdown(&self) -> io::Result<()> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_cancellation_closes_gracefully_and_reports_clean() {
        let component = ListenerComponent::new("server1", FakeListener::new());
        let ctx = CancellationToken::new();
        ctx.cancel();

        assert!(component.run(ctx).await.is_ok());
        assert!(component.listener.shutdown_called.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn test_serve_fault_surfaces_as_operation_error() {
        let component = ListenerComponent::new("server1", BindFailure);
        let out = component.run(CancellationToken::new()).await;

        match out {
            Err(ComponentError::Operation { component, source }) => {
                assert_eq!(component, "server1");
                assert_eq!(source.kind(), io::ErrorKind::AddrInUse);
            }
            other => panic!("expected operation error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_drain_is_logged_but_still_clean() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        let component = ListenerComponent::new("server1", SlowDrain { stop: Notify::new() })
            .with_grace(Duration::from_millis(50))
            .with_bus(bus);
        let ctx = CancellationToken::new();
        ctx.cancel();

        assert!(component.run(ctx).await.is_ok());

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::ShutdownFailed);
        assert_eq!(ev.component.as_deref(), Some("server1"));
        assert!(ev.reason.unwrap().contains("still pending"));
    }
}
