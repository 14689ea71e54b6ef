//! # Global runtime configuration.
//!
//! [`Config`] carries the knobs shared by the composition root: the default
//! grace window handed to listener components and the capacity of the event
//! bus channel.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use rungroup::Config;
//!
//! let mut cfg = Config::default();
//! cfg.grace = Duration::from_secs(5);
//! cfg.bus_capacity = 256;
//!
//! assert_eq!(cfg.grace, Duration::from_secs(5));
//! ```

use std::time::Duration;

/// Configuration for a supervised run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Default grace window for bounded graceful closes (listeners).
    pub grace: Duration,
    /// Capacity of the event bus channel.
    pub bus_capacity: usize,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `grace = 10s`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(10),
            bus_capacity: 1024,
        }
    }
}
