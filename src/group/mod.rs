//! Group core: coordination and first-failure aggregation.
//!
//! - `group`: spawns one task per component under a shared cancellation
//!   scope and joins them all;
//! - `latch`: the write-at-most-once slot holding the first failure.

mod group;
mod latch;

pub use group::{Group, GroupResult};
