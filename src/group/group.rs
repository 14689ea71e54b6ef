//! # Group: run components concurrently, propagate the first failure.
//!
//! The [`Group`] owns the root [`CancellationToken`], a `JoinSet` of
//! component tasks, the first-failure latch, and the event bus. Components
//! receive observe-only child tokens; cancelling the group is exclusively the
//! group's reaction to *any* component returning.
//!
//! ## Wiring
//! ```text
//! Group::new(cfg, subscribers)
//!   ├─► Bus (broadcast)  ──► bus listener ──► SubscriberSet::emit (panic-isolated)
//!   └─► root CancellationToken
//!
//! Group::start(component)           (one per component)
//!   └─► set.spawn(wrapper):
//!         ├─ publish ComponentStarting
//!         ├─ outcome = component.run(root.child_token()).await
//!         ├─ publish ComponentStopped | ComponentFailed
//!         ├─ latch.record(err)            (first failure wins)
//!         └─ root.cancel()                (any return cancels; idempotent)
//!
//! Group::wait()
//!   └─► join every task (no timeout) ──► publish GroupDone
//!         └─ latched first failure, else Ok(())
//! ```
//!
//! ## Ordering
//! The wrapper records the Outcome *before* cancelling, so cancellation is
//! observed no earlier than the triggering Outcome exists. Liveness of
//! `wait()` depends on every component honoring cancellation within its own
//! grace logic; the group itself never times out.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::components::ComponentRef;
use crate::config::Config;
use crate::error::ComponentError;
use crate::events::{Bus, Event, EventKind};
use crate::group::latch::FailureLatch;
use crate::subscribers::{Subscribe, SubscriberSet};

/// The group's aggregate outcome: the first failed Outcome observed, else
/// clean.
pub type GroupResult = Result<(), ComponentError>;

/// Supervises a fixed set of components under one cancellation scope.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use rungroup::{ComponentFn, ComponentRef, Config, Group, TimerComponent};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut group = Group::new(Config::default(), Vec::new());
///
/// let worker: ComponentRef = ComponentFn::arc("worker", |ctx: CancellationToken| async move {
///     ctx.cancelled().await;
///     Ok(())
/// });
/// group.start(worker);
/// group.start(std::sync::Arc::new(TimerComponent::new(
///     "deadline",
///     Duration::from_millis(10),
/// )));
///
/// // The timer fires first; the worker winds down on cancellation.
/// assert!(group.wait().await.is_err());
/// # }
/// ```
pub struct Group {
    token: CancellationToken,
    set: JoinSet<()>,
    latch: Arc<FailureLatch>,
    bus: Bus,
}

impl Group {
    /// Creates a group with a fresh root token and spawns the bus listener
    /// that fans events out to `subscribers`.
    pub fn new(cfg: Config, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        Self::spawn_bus_listener(&bus, subscribers);

        Self {
            token: CancellationToken::new(),
            set: JoinSet::new(),
            latch: Arc::new(FailureLatch::default()),
            bus,
        }
    }

    /// Returns a handle to the event bus (for components that log through
    /// it, e.g. [`ListenerComponent::with_bus`](crate::ListenerComponent::with_bus)).
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Registers a component and starts it on its own concurrent task.
    ///
    /// The component gets a child token: it can observe cancellation but
    /// cannot cancel its siblings.
    pub fn start(&mut self, component: ComponentRef) {
        let ctx = self.token.child_token();
        let root = self.token.clone();
        let latch = Arc::clone(&self.latch);
        let bus = self.bus.clone();

        self.set.spawn(async move {
            let label = component.label().to_string();
            bus.publish(Event::new(EventKind::ComponentStarting).with_component(label.clone()));

            let outcome = component.run(ctx).await;
            match &outcome {
                Ok(()) => {
                    bus.publish(
                        Event::new(EventKind::ComponentStopped).with_component(label.clone()),
                    );
                }
                Err(e) => {
                    bus.publish(
                        Event::new(EventKind::ComponentFailed)
                            .with_component(label.clone())
                            .with_reason(e.to_string()),
                    );
                }
            }

            // Outcome first, cancellation second: siblings observe the stop
            // signal no earlier than the triggering Outcome exists.
            if let Err(e) = outcome {
                latch.record(e);
            }
            if !root.is_cancelled() {
                bus.publish(Event::new(EventKind::CancelRequested).with_component(label));
            }
            root.cancel();
        });
    }

    /// Blocks until every component task has returned and yields the
    /// [`GroupResult`].
    ///
    /// There is no timeout here: liveness depends on components honoring
    /// cancellation within their own bounds.
    pub async fn wait(mut self) -> GroupResult {
        while self.set.join_next().await.is_some() {}
        self.bus.publish(Event::new(EventKind::GroupDone));

        match self.latch.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Subscribes to the bus and forwards events to the subscriber set.
    ///
    /// Lagged receivers skip ahead; the task exits once the group (the only
    /// sender) is dropped.
    fn spawn_bus_listener(bus: &Bus, subscribers: Vec<Arc<dyn Subscribe>>) {
        let set = SubscriberSet::new(subscribers);
        if set.is_empty() {
            return;
        }

        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => set.emit(&ev).await,
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }
}
