//! Type-erased values
//!
//! Resolved instances, override values and parameter defaults all travel
//! through the engine as [`Value`]: a shared handle to any `Send + Sync`
//! type that can be rendered with `Debug` and downcast back to its concrete
//! type by the constructor that consumes it.

use downcast_rs::{DowncastSync, impl_downcast};
use std::fmt;
use std::sync::Arc;

/// Anything that can be stored in a [`Value`]
pub trait Object: DowncastSync + fmt::Debug {}
impl_downcast!(sync Object);

impl<T: DowncastSync + fmt::Debug> Object for T {}

/// Shared, type-erased value
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Object>,
    type_name: &'static str,
}

impl Value {
    /// Wrap a value
    pub fn new<T: Object>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value without copying it
    pub fn from_arc<T: Object>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the concrete Rust type held
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if the held value is a `T`
    pub fn is<T: Object>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the held value as a `T`
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Share the held value as an `Arc<T>`
    pub fn downcast<T: Object>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast_arc::<T>().ok()
    }

    /// True if both handles point at the same instance
    pub fn ptr_eq(&self, other: &Value) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}
