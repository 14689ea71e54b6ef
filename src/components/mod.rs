//! # Component abstractions and the built-in components.
//!
//! - [`Component`] — trait for long-running, cancellable units of work
//! - [`ComponentFn`] — closure-backed component
//! - [`ComponentRef`] — shared handle (`Arc<dyn Component>`)
//! - [`ListenerComponent`] / [`Listener`] — blocking serve loop with bounded
//!   graceful shutdown
//! - [`TimerComponent`] — deadline vs. cancellation
//! - [`SignalComponent`] / [`InterruptSource`] — external interrupt vs.
//!   cancellation

mod component;
mod component_fn;
mod listener;
mod signal;
mod timer;

pub use component::{Component, ComponentRef};
pub use component_fn::ComponentFn;
pub use listener::{DEFAULT_GRACE, Listener, ListenerComponent};
pub use signal::{InterruptSource, OsInterrupts, SignalComponent};
pub use timer::TimerComponent;
