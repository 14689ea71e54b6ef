//! # First-failure latch.
//!
//! A write-at-most-once slot for the first failed Outcome observed across the
//! group. The write is guarded by mutual exclusion, so concurrent failures
//! resolve to exactly one winner (by arrival) and never a composite value.
//! Later writes are observed and discarded.
//!
//! No await is ever held across the lock, so a plain `std::sync::Mutex` is
//! the right primitive here.

use std::sync::Mutex;

use crate::error::ComponentError;

/// Write-at-most-once slot holding the first recorded failure.
#[derive(Debug, Default)]
pub(crate) struct FailureLatch {
    slot: Mutex<Option<ComponentError>>,
}

impl FailureLatch {
    /// Records a failure if none has been recorded yet.
    ///
    /// Returns `true` iff this call latched its error.
    pub(crate) fn record(&self, err: ComponentError) -> bool {
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if slot.is_none() {
            *slot = Some(err);
            true
        } else {
            false
        }
    }

    /// Takes the latched failure, if any.
    pub(crate) fn take(&self) -> Option<ComponentError> {
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn deadline(component: &str) -> ComponentError {
        ComponentError::Deadline {
            component: component.into(),
            after: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_first_write_wins() {
        let latch = FailureLatch::default();
        assert!(latch.record(deadline("first")));
        assert!(!latch.record(deadline("second")));

        let latched = latch.take().unwrap();
        assert_eq!(latched.component(), "first");
    }

    #[test]
    fn test_empty_latch_takes_none() {
        let latch = FailureLatch::default();
        assert!(latch.take().is_none());
    }

    #[test]
    fn test_concurrent_writes_latch_exactly_one() {
        let latch = Arc::new(FailureLatch::default());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let latch = Arc::clone(&latch);
                std::thread::spawn(move || latch.record(deadline(&format!("c{i}"))))
            })
            .collect();

        let wins: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();

        assert_eq!(wins, 1);
        assert!(latch.take().is_some());
    }
}
