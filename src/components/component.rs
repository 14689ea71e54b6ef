//! # The component contract.
//!
//! A [`Component`] is a named, long-lived unit of work: it runs until
//! cancelled or until an internal terminal condition occurs, and returns
//! exactly one Outcome — `Ok(())` for a clean stop, `Err(ComponentError)` for
//! a failure tagged with the component's label.
//!
//! Components receive an observe-only [`CancellationToken`]: they can wait on
//! it and react to it, but cancelling siblings is the group's job, triggered
//! by any component returning.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ComponentError;

/// Shared handle to a component (`Arc<dyn Component>`).
pub type ComponentRef = Arc<dyn Component>;

/// # Long-running, cancellable unit of work.
///
/// Implementations must produce exactly one Outcome per invocation and are
/// expected to wind down promptly once `ctx` is cancelled. A stop caused by
/// cancellation is a *clean* Outcome, even when internal cleanup misbehaves.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use rungroup::{Component, ComponentError};
///
/// struct Idle;
///
/// #[async_trait]
/// impl Component for Idle {
///     fn label(&self) -> &str { "idle" }
///
///     async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError> {
///         ctx.cancelled().await;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Component: Send + Sync + 'static {
    /// Returns a stable, human-readable label for diagnostics.
    fn label(&self) -> &str;

    /// Runs until cancelled or until an internal terminal condition occurs.
    async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError>;
}
