//! Error types produced by supervised components.
//!
//! Every failed Outcome carries a [`ComponentError`] tagged with the label of
//! the component that produced it. The variants map one-to-one onto the ways
//! a component can terminate abnormally:
//!
//! - [`ComponentError::Operation`] — the component's own blocking work faulted
//!   (listener failed to bind, serve loop died, signal registration failed).
//! - [`ComponentError::Deadline`] — a timer's configured duration elapsed
//!   before cancellation.
//! - [`ComponentError::Interrupt`] — an external interrupt arrived before
//!   cancellation.
//! - [`ComponentError::Shutdown`] — a cancellation-triggered graceful close
//!   failed or outlived its grace window. This variant is **never** a
//!   component's Outcome: it is published on the event bus for operability
//!   and the component still reports clean.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// # Terminal errors of supervised components.
///
/// The first of these observed by the [`Group`](crate::Group) becomes the
/// group's result; all later ones are discarded from the result (but remain
/// visible as [`ComponentFailed`](crate::EventKind::ComponentFailed) events).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The component's own work faulted (bind error, serve fault, ...).
    #[error("{component}: {source}")]
    Operation {
        /// Label of the component that faulted.
        component: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A timer's deadline elapsed before cancellation.
    #[error("{component}: deadline elapsed after {after:?}")]
    Deadline {
        /// Label of the timer component.
        component: String,
        /// The configured duration that elapsed.
        after: Duration,
    },

    /// An external interrupt was delivered before cancellation.
    #[error("{component}: external interrupt")]
    Interrupt {
        /// Label of the signal component.
        component: String,
    },

    /// A graceful close failed or exceeded its grace window.
    ///
    /// Logged, never propagated: cancellation-triggered stops always report
    /// a clean Outcome.
    #[error("{component}: graceful close failed within {grace:?}: {reason}")]
    Shutdown {
        /// Label of the component whose close misbehaved.
        component: String,
        /// The grace window that was in effect.
        grace: Duration,
        /// Why the close failed (error text or "still pending").
        reason: String,
    },
}

impl ComponentError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use rungroup::ComponentError;
    ///
    /// let err = ComponentError::Deadline {
    ///     component: "timer".into(),
    ///     after: Duration::from_secs(2),
    /// };
    /// assert_eq!(err.as_label(), "deadline_elapsed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ComponentError::Operation { .. } => "operation_failed",
            ComponentError::Deadline { .. } => "deadline_elapsed",
            ComponentError::Interrupt { .. } => "external_interrupt",
            ComponentError::Shutdown { .. } => "shutdown_failed",
        }
    }

    /// Returns the label of the component this error originated from.
    pub fn component(&self) -> &str {
        match self {
            ComponentError::Operation { component, .. }
            | ComponentError::Deadline { component, .. }
            | ComponentError::Interrupt { component }
            | ComponentError::Shutdown { component, .. } => component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let op = ComponentError::Operation {
            component: "server1".into(),
            source: io::Error::other("boom"),
        };
        let dl = ComponentError::Deadline {
            component: "timer".into(),
            after: Duration::from_secs(1),
        };
        let int = ComponentError::Interrupt {
            component: "signals".into(),
        };
        let sd = ComponentError::Shutdown {
            component: "server1".into(),
            grace: Duration::from_secs(10),
            reason: "still pending".into(),
        };

        assert_eq!(op.as_label(), "operation_failed");
        assert_eq!(dl.as_label(), "deadline_elapsed");
        assert_eq!(int.as_label(), "external_interrupt");
        assert_eq!(sd.as_label(), "shutdown_failed");
    }

    #[test]
    fn test_component_tag_is_preserved() {
        let err = ComponentError::Interrupt {
            component: "signals".into(),
        };
        assert_eq!(err.component(), "signals");
        assert!(err.to_string().contains("signals"));
    }
}
