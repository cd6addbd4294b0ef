//! # Weave Domain
//!
//! Core types shared by every layer of the resolution engine:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type names, parameter and type descriptors, type-erased values |
//! | [`ports`] | The type-introspection port consumed by the engine |
//! | [`error`] | Resolution error taxonomy and the umbrella error type |
//! | [`constants`] | Domain-level defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{
    ConstructError, Error, IntrospectionError, ResolutionError, ResolutionErrorKind, Result,
};
pub use ports::TypeIntrospector;
pub use value_objects::*;
