//! # Lifecycle events emitted by the group and its components.
//!
//! [`EventKind`] classifies the handful of things that happen during a run:
//! components starting, stopping, failing, cancellation being triggered, and
//! graceful closes misbehaving. [`Event`] carries the metadata (component
//! label, reason, timestamp, sequence number).
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore order when events are observed out of
//! order.
//!
//! ## Example
//! ```rust
//! use rungroup::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ComponentFailed)
//!     .with_component("server1")
//!     .with_reason("address already in use");
//!
//! assert_eq!(ev.kind, EventKind::ComponentFailed);
//! assert_eq!(ev.component.as_deref(), Some("server1"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of group lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A component's task has been spawned and is about to run.
    ///
    /// Sets: `component`, `at`, `seq`.
    ComponentStarting,

    /// A component returned a clean Outcome (finished on its own **or**
    /// wound down after cancellation).
    ///
    /// Sets: `component`, `at`, `seq`.
    ComponentStopped,

    /// A component returned a failed Outcome.
    ///
    /// Published for *every* failure, including the ones the first-failure
    /// latch discards from the group result.
    ///
    /// Sets: `component`, `reason`, `at`, `seq`.
    ComponentFailed,

    /// The first component to return has triggered group-wide cancellation.
    ///
    /// Sets: `component` (the trigger), `at`, `seq`.
    CancelRequested,

    /// A cancellation-triggered graceful close failed or exceeded its grace
    /// window. Diagnostic only; the component still reports clean.
    ///
    /// Sets: `component`, `reason`, `at`, `seq`.
    ShutdownFailed,

    /// Every component task has returned; the group result is final.
    ///
    /// Sets: `at`, `seq`.
    GroupDone,
}

/// One lifecycle event with metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Label of the component involved, if any.
    pub component: Option<String>,
    /// Human-readable detail (failure message, close error), if any.
    pub reason: Option<String>,
    /// Wall-clock timestamp at creation.
    pub at: SystemTime,
    /// Globally monotonic sequence number.
    pub seq: u64,
}

impl Event {
    /// Creates an event of the given kind, stamped with time and sequence.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            component: None,
            reason: None,
            at: SystemTime::now(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Attaches the component label.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Attaches a human-readable reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
