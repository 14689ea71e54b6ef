//! Concrete listeners.
//!
//! [`TcpServer`] is a minimal [`Listener`](crate::Listener) implementation:
//! an accept loop with per-connection handlers and a graceful drain.

mod tcp;

pub use tcp::TcpServer;
