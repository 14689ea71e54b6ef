//! # External-interrupt component.
//!
//! [`SignalComponent`] bridges interrupt delivery into the component model:
//! it waits on cancellation vs. interrupt arrival. Interrupt arrival yields
//! [`ComponentError::Interrupt`](crate::ComponentError::Interrupt);
//! cancellation yields clean.
//!
//! The interrupt mechanism sits behind [`InterruptSource`] so tests can
//! deliver interrupts deterministically. [`OsInterrupts`] is the production
//! source.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//! - `tokio::signal::ctrl_c` as a fallback
//!
//! **Other platforms:**
//! - Ctrl-C via [`tokio::signal::ctrl_c`]

use std::borrow::Cow;
use std::io;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::components::Component;
use crate::error::ComponentError;

/// # Interrupt delivery mechanism.
///
/// `recv` registers interest when the future is created/polled — before the
/// wait can complete — and resolves once per received interrupt.
#[async_trait]
pub trait InterruptSource: Send + Sync + 'static {
    /// Resolves on the next interrupt, or errors if registration fails.
    async fn recv(&self) -> io::Result<()>;
}

/// OS-backed interrupt source (SIGINT/SIGTERM/Ctrl-C).
#[derive(Debug, Default)]
pub struct OsInterrupts;

#[async_trait]
impl InterruptSource for OsInterrupts {
    async fn recv(&self) -> io::Result<()> {
        wait_for_interrupt().await
    }
}

/// Waits for a termination signal. Each call installs independent listeners.
#[cfg(unix)]
async fn wait_for_interrupt() -> io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    }
    Ok(())
}

/// Waits for a termination signal. Each call installs independent listeners.
#[cfg(not(unix))]
async fn wait_for_interrupt() -> io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Converts an external interrupt into a terminal Outcome unless cancelled
/// first.
#[derive(Debug)]
pub struct SignalComponent<S = OsInterrupts> {
    label: Cow<'static, str>,
    source: S,
}

impl SignalComponent<OsInterrupts> {
    /// Creates a signal component listening for OS interrupts.
    pub fn os(label: impl Into<Cow<'static, str>>) -> Self {
        Self::with_source(label, OsInterrupts)
    }
}

impl<S: InterruptSource> SignalComponent<S> {
    /// Creates a signal component over a custom interrupt source.
    pub fn with_source(label: impl Into<Cow<'static, str>>, source: S) -> Self {
        Self {
            label: label.into(),
            source,
        }
    }
}

#[async_trait]
impl<S: InterruptSource> Component for SignalComponent<S> {
    fn label(&self) -> &str {
        &self.label
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError> {
        // The source future is polled before either branch can complete, so
        // an interrupt arriving concurrently with startup is not missed.
        tokio::select! {
            _ = ctx.cancelled() => Ok(()),
            res = self.source.recv() => match res {
                Ok(()) => Err(ComponentError::Interrupt {
                    component: self.label.to_string(),
                }),
                Err(e) => Err(ComponentError::Operation {
                    component: self.label.to_string(),
                    source: e,
                }),
            },
        }
    }
}
