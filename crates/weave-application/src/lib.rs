//! # Weave Application Layer
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Recursive resolution engine (`make`) |
//! | [`registry`] | Descriptor registry implementing the introspection port |

pub mod container;
pub mod registry;

pub use container::{Container, ResolutionContext};
pub use registry::{
    TYPE_REGISTRATIONS, TypeRegistration, TypeRegistry, TypeRegistryBuilder,
    list_registered_types,
};
