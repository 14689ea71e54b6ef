//! Subscriber API: observe lifecycle events.
//!
//! - [`Subscribe`] — trait for user-defined event sinks (logging, metrics).
//! - [`SubscriberSet`] — fan-out over multiple subscribers with panic
//!   isolation.
//! - `LogWriter` — simple stdout sink, behind the `logging` feature.

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
