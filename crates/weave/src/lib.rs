//! # Weave
//!
//! A recursive, descriptor-driven object-resolution engine: ask for a type by
//! name and get a brand-new instance whose constructor dependencies have been
//! resolved recursively.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use weave::application::{Container, TypeRegistry};
//! use weave::domain::{Overrides, Parameter, TypeDescriptor, Value};
//!
//! #[derive(Debug)]
//! struct Sys;
//!
//! #[derive(Debug)]
//! struct File {
//!     sys: Arc<Sys>,
//! }
//!
//! let registry = TypeRegistry::builder()
//!     .register(TypeDescriptor::concrete("Sys", |_| Ok(Value::new(Sys))))
//!     .register(
//!         TypeDescriptor::concrete("File", |args| {
//!             Ok(Value::new(File { sys: args.object("sys")? }))
//!         })
//!         .with_parameter(Parameter::object("sys", "Sys")),
//!     )
//!     .build();
//!
//! let container = Container::new(Arc::new(registry));
//! let file = container.make_as::<File>("File", Overrides::new()).unwrap();
//! assert_eq!(format!("{file:?}"), "File { sys: Sys }");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type descriptors, values, the introspection port and errors
//! - `application` - The resolution engine and the type registry
//! - `infrastructure` - Configuration, logging and container bootstrap

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use weave_domain::*;
}

/// Application layer - resolution engine and type registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use weave_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use weave_infrastructure::*;
}

pub mod cli;
pub mod demo;

pub use weave_application::Container;
pub use weave_domain::{Overrides, ResolutionError, TypeName, Value};
