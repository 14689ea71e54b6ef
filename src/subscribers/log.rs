//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [starting] component=server1
//! [stopped] component=server1
//! [failed] component=timer err="timer: deadline elapsed after 2s"
//! [cancel-requested] trigger=timer
//! [shutdown-failed] component=server1 err="graceful close still pending after 10s"
//! [group-done]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Intended for development and demos —
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::ComponentStarting => {
                if let Some(c) = &e.component {
                    println!("[starting] component={c}");
                }
            }
            EventKind::ComponentStopped => {
                if let Some(c) = &e.component {
                    println!("[stopped] component={c}");
                }
            }
            EventKind::ComponentFailed => {
                println!(
                    "[failed] component={:?} err={:?}",
                    e.component, e.reason
                );
            }
            EventKind::CancelRequested => {
                println!("[cancel-requested] trigger={:?}", e.component);
            }
            EventKind::ShutdownFailed => {
                println!(
                    "[shutdown-failed] component={:?} err={:?}",
                    e.component, e.reason
                );
            }
            EventKind::GroupDone => {
                println!("[group-done]");
            }
        }
    }
}
