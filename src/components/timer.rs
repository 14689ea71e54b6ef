//! # Deadline component.
//!
//! [`TimerComponent`] waits on cancellation vs. an elapsed duration. If the
//! duration elapses first the run ends with
//! [`ComponentError::Deadline`](crate::ComponentError::Deadline); if
//! cancellation fires first the run ends clean.
//!
//! Stateless beyond the configured duration, so an instance can be reused
//! across independent runs.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::components::Component;
use crate::error::ComponentError;

/// Fires a deadline unless cancelled first.
#[derive(Debug)]
pub struct TimerComponent {
    label: Cow<'static, str>,
    duration: Duration,
}

impl TimerComponent {
    /// Creates a timer that fails with a deadline error after `duration`.
    pub fn new(label: impl Into<Cow<'static, str>>, duration: Duration) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }
}

#[async_trait]
impl Component for TimerComponent {
    fn label(&self) -> &str {
        &self.label
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError> {
        tokio::select! {
            _ = ctx.cancelled() => Ok(()),
            _ = tokio::time::sleep(self.duration) => Err(ComponentError::Deadline {
                component: self.label.to_string(),
                after: self.duration,
            }),
        }
    }
}
