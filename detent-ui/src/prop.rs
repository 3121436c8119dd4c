//! Callback handles for args structs.
//!
//! Closures cannot be compared, but args need `PartialEq` so a component can
//! tell whether its configuration changed. [`CallbackWith`] compares by
//! identity: clones of one handle are equal, separately created handles are
//! not.

use std::{fmt, sync::Arc};

/// A shared `Fn(T) -> R` compared by identity.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Wraps a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T> CallbackWith<T> {
    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}
