//! # The subscriber contract.
//!
//! Implement [`Subscribe`] to observe lifecycle events: component starts and
//! stops, failures (including the ones the first-failure latch discards),
//! cancellation, and graceful-close problems.

use async_trait::async_trait;

use crate::events::Event;

/// # Asynchronous event sink.
///
/// Handlers should be quick; events are delivered sequentially per run.
/// A panicking subscriber is isolated and does not affect the group.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use rungroup::{Event, EventKind, Subscribe};
///
/// struct FailureCounter(std::sync::atomic::AtomicUsize);
///
/// #[async_trait]
/// impl Subscribe for FailureCounter {
///     async fn on_event(&self, event: &Event) {
///         if event.kind == EventKind::ComponentFailed {
///             self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one event.
    async fn on_event(&self, event: &Event);
}
