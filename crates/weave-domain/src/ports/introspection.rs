//! Type-introspection port

use crate::error::IntrospectionError;
use crate::value_objects::{TypeDescriptor, TypeName};
use std::sync::Arc;

/// Yields the descriptor of a type by name
///
/// Implementations must be safe to share between threads; the engine only
/// ever reads from them.
pub trait TypeIntrospector: Send + Sync {
    /// Describe the named type
    fn introspect(&self, type_name: &TypeName) -> Result<Arc<TypeDescriptor>, IntrospectionError>;
}
