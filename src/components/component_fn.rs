//! # Function-backed component (`ComponentFn`)
//!
//! [`ComponentFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`,
//! producing a fresh future per run. No shared mutable state; if shared
//! state is needed, capture an `Arc<...>` explicitly inside the closure.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use rungroup::{ComponentError, ComponentFn, ComponentRef};
//!
//! let c: ComponentRef = ComponentFn::arc("worker", |ctx: CancellationToken| async move {
//!     ctx.cancelled().await;
//!     Ok::<_, ComponentError>(())
//! });
//!
//! assert_eq!(c.label(), "worker");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::components::Component;
use crate::error::ComponentError;

/// Closure-backed component implementation.
#[derive(Debug)]
pub struct ComponentFn<F> {
    label: Cow<'static, str>,
    f: F,
}

impl<F> ComponentFn<F> {
    /// Creates a new function-backed component.
    ///
    /// Prefer [`ComponentFn::arc`] when you immediately need a
    /// [`ComponentRef`](crate::ComponentRef).
    pub fn new(label: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }

    /// Creates the component and returns it as a shared handle.
    pub fn arc(label: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(label, f))
    }
}

#[async_trait]
impl<F, Fut> Component for ComponentFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ComponentError>> + Send + 'static,
{
    fn label(&self) -> &str {
        &self.label
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), ComponentError> {
        (self.f)(ctx).await
    }
}
