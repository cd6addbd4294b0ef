//! Ports consumed by the resolution engine

pub mod introspection;

pub use introspection::TypeIntrospector;
