//! # rungroup
//!
//! **rungroup** supervises a fixed set of heterogeneous, long-lived
//! components under one shared cancellation scope. If any single component
//! finishes — cleanly or not — every sibling is told to wind down
//! cooperatively, and the group's overall outcome is deterministically the
//! *first* reported failure, with all later ones discarded (but still
//! observable as events).
//!
//! ## Architecture
//! ```text
//!   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//!   │ TimerComponent│   │SignalComponent│   │ListenerComp.  │
//!   │  (deadline)   │   │ (OS interrupt)│   │ (serve loop)  │
//!   └──────┬────────┘   └──────┬────────┘   └──────┬────────┘
//!          ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Group                                                      │
//! │  - root CancellationToken (children observe, never cancel)  │
//! │  - FailureLatch (first failed Outcome wins, write-once)     │
//! │  - Bus (broadcast lifecycle events) ──► SubscriberSet       │
//! │  - JoinSet (wait() joins every task, no timeout)            │
//! └─────────────────────────────────────────────────────────────┘
//!
//! per-component wrapper task:
//!   ├─► publish ComponentStarting
//!   ├─► outcome = component.run(child_token).await
//!   ├─► publish ComponentStopped | ComponentFailed
//!   ├─► latch.record(err)      (first failure wins)
//!   └─► root.cancel()          (any return cancels; idempotent)
//! ```
//!
//! ## The component contract
//! A [`Component`] runs until cancelled or until an internal terminal
//! condition occurs, and returns exactly one Outcome: `Ok(())` (clean) or
//! `Err(ComponentError)` tagged with its label. Cancellation-triggered stops
//! are always clean — even when internal cleanup fails, as with a listener
//! whose graceful close exceeds its grace window (that is logged, never
//! propagated).
//!
//! ## Built-in components
//! | Component             | Terminal condition        | On cancellation        |
//! |-----------------------|---------------------------|------------------------|
//! | [`ListenerComponent`] | serve loop faulted        | bounded graceful close |
//! | [`TimerComponent`]    | deadline elapsed          | returns clean          |
//! | [`SignalComponent`]   | external interrupt        | returns clean          |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use rungroup::{ComponentFn, ComponentRef, Config, Group, TimerComponent};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut group = Group::new(Config::default(), Vec::new());
//!
//!     // A cooperative worker: runs until the group cancels it.
//!     let worker: ComponentRef = ComponentFn::arc("worker", |ctx: CancellationToken| async move {
//!         ctx.cancelled().await;
//!         Ok(())
//!     });
//!     group.start(worker);
//!
//!     // A deadline: fails after 10ms, which cancels the worker.
//!     group.start(Arc::new(TimerComponent::new("deadline", Duration::from_millis(10))));
//!
//!     let result = group.wait().await;
//!     assert_eq!(result.unwrap_err().as_label(), "deadline_elapsed");
//! }
//! ```
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference
//!   only)_.

mod components;
mod config;
mod error;
mod events;
mod group;
mod net;
mod subscribers;

// ---- Public re-exports ----

pub use components::{
    Component, ComponentFn, ComponentRef, DEFAULT_GRACE, InterruptSource, Listener,
    ListenerComponent, OsInterrupts, SignalComponent, TimerComponent,
};
pub use config::Config;
pub use error::ComponentError;
pub use events::{Bus, Event, EventKind};
pub use group::{Group, GroupResult};
pub use net::TcpServer;
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
