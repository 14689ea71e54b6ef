//! # SubscriberSet: fan-out over multiple subscribers.
//!
//! Distributes each [`Event`] to every subscriber in turn. Delivery is
//! sequential — a group emits a handful of lifecycle events per run, so
//! per-subscriber queues would be machinery without a workload.
//!
//! ## What it guarantees
//! - Per-run FIFO: subscribers see events in bus order.
//! - Panic isolation: a panicking subscriber is caught and skipped; the
//!   remaining subscribers still receive the event.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use super::Subscribe;
use crate::events::Event;

/// Composite sink over a fixed set of subscribers.
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set from the given subscribers.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Whether the set has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Delivers one event to every subscriber, isolating panics.
    pub async fn emit(&self, event: &Event) {
        for sub in &self.subs {
            // A panicking sink must not take down the bus listener.
            let fut = sub.on_event(event);
            let _ = AssertUnwindSafe(fut).catch_unwind().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    #[async_trait]
    impl Subscribe for Counter {
        async fn on_event(&self, _event: &Event) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    struct Panicker;

    #[async_trait]
    impl Subscribe for Panicker {
        async fn on_event(&self, _event: &Event) {
            panic!("sink blew up");
        }
    }

    #[tokio::test]
    async fn test_emit_reaches_all_subscribers() {
        let a = Arc::new(Counter(AtomicUsize::new(0)));
        let b = Arc::new(Counter(AtomicUsize::new(0)));
        let set = SubscriberSet::new(vec![a.clone(), b.clone()]);

        set.emit(&Event::new(EventKind::GroupDone)).await;

        assert_eq!(a.0.load(Ordering::Relaxed), 1);
        assert_eq!(b.0.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_panicking_subscriber_is_isolated() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Panicker), counter.clone()];
        let set = SubscriberSet::new(subs);

        set.emit(&Event::new(EventKind::GroupDone)).await;

        // The panicker did not prevent delivery to the next subscriber.
        assert_eq!(counter.0.load(Ordering::Relaxed), 1);
    }
}
