//! Runtime events: types and broadcast bus.
//!
//! Groups the event **data model** and the **bus** used to publish/subscribe
//! to lifecycle events emitted by the group and its components.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Group` (component lifecycle, cancellation), listener
//!   components (graceful-close failures).
//! - **Consumer**: the group's bus listener, which fans events out to the
//!   [`SubscriberSet`](crate::SubscriberSet).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
