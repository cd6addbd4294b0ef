//! Type Registry
//!
//! Descriptor table backing the type-introspection port. Types can be
//! registered explicitly through [`TypeRegistryBuilder`] or at compile time
//! through the `linkme` distributed slice [`TYPE_REGISTRATIONS`]:
//!
//! ```ignore
//! use weave_application::registry::{TypeRegistration, TYPE_REGISTRATIONS};
//!
//! #[linkme::distributed_slice(TYPE_REGISTRATIONS)]
//! static SYS: TypeRegistration = TypeRegistration {
//!     name: "Sys",
//!     description: "System handle",
//!     describe: || TypeDescriptor::concrete("Sys", |_| Ok(Value::new(Sys))),
//! };
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};
use weave_domain::error::IntrospectionError;
use weave_domain::ports::TypeIntrospector;
use weave_domain::value_objects::{TypeDescriptor, TypeName};

/// Compile-time registration entry
pub struct TypeRegistration {
    /// Type name the descriptor is registered under
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Produces the descriptor
    pub describe: fn() -> TypeDescriptor,
}

#[linkme::distributed_slice]
pub static TYPE_REGISTRATIONS: [TypeRegistration] = [..];

/// List every linked registration as (name, description)
pub fn list_registered_types() -> Vec<(&'static str, &'static str)> {
    let mut types: Vec<_> = TYPE_REGISTRATIONS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    types.sort_unstable();
    types
}

/// Descriptor table keyed by type name
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: HashMap<TypeName, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Registry holding every linked registration
    pub fn from_linked() -> Self {
        Self::builder().with_linked().build()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .descriptors
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort_unstable();
        names
    }
}

impl TypeIntrospector for TypeRegistry {
    fn introspect(&self, type_name: &TypeName) -> Result<Arc<TypeDescriptor>, IntrospectionError> {
        if type_name.is_blank() {
            return Err(IntrospectionError::InvalidName {
                name: type_name.to_string(),
            });
        }
        self.descriptors
            .get(type_name)
            .cloned()
            .ok_or_else(|| IntrospectionError::UnknownType {
                name: type_name.to_string(),
                available: self.names(),
            })
    }
}

/// Builder for [`TypeRegistry`]
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    descriptors: HashMap<TypeName, Arc<TypeDescriptor>>,
}

impl TypeRegistryBuilder {
    /// Register a descriptor; a later registration of the same name wins
    pub fn register(mut self, descriptor: TypeDescriptor) -> Self {
        let name = descriptor.name().clone();
        if self
            .descriptors
            .insert(name.clone(), Arc::new(descriptor))
            .is_some()
        {
            warn!(type_name = %name, "Type registered twice, replacing earlier descriptor");
        }
        self
    }

    /// Register every linked registration
    pub fn with_linked(self) -> Self {
        let registry = TYPE_REGISTRATIONS
            .iter()
            .fold(self, |builder, entry| builder.register((entry.describe)()));
        debug!(count = TYPE_REGISTRATIONS.len(), "Collected linked type registrations");
        registry
    }

    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            descriptors: self.descriptors,
        }
    }
}
