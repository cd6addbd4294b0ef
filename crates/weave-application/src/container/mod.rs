//! Resolution Engine
//!
//! Turns a type name into a freshly constructed instance by recursively
//! resolving its constructor parameters.
//!
//! ```text
//! make(type, overrides)
//!     │  push override scope
//!     ▼
//! build(type) ── introspect ── instantiable? ── push build stack
//!     │
//!     ▼
//! resolve_dependencies(parameters)
//!     ├── override for name?   → use it verbatim
//!     ├── object parameter?    → make(declared type)   (recursion)
//!     └── otherwise            → resolve_primitive (default or fail)
//!     │
//!     ▼  pop build stack, pop override scope
//! constructor(arguments)
//! ```
//!
//! All per-call state lives in a [`ResolutionContext`] created by each
//! top-level [`Container::make`], so one container can serve concurrent
//! callers. Nothing is cached: every call builds a new object graph.

mod builder;
mod context;
mod dependencies;
mod primitive;

pub use context::ResolutionContext;

use std::sync::Arc;

use tracing::warn;
use weave_domain::error::{ConstructError, ResolutionError};
use weave_domain::ports::TypeIntrospector;
use weave_domain::value_objects::{Object, Overrides, ResolverOptions, TypeName, Value};

/// Recursive object-resolution engine
#[derive(Clone)]
pub struct Container {
    introspector: Arc<dyn TypeIntrospector>,
    options: ResolverOptions,
}

impl Container {
    /// Create a container over the given introspection facility
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self {
            introspector,
            options: ResolverOptions::default(),
        }
    }

    /// Replace the resolver options
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Build a fresh instance of `type_name`
    ///
    /// `overrides` supplies values for named constructor parameters of the
    /// requested type and take precedence over automatic resolution.
    pub fn make(
        &self,
        type_name: impl Into<TypeName>,
        overrides: Overrides,
    ) -> Result<Value, ResolutionError> {
        let type_name = type_name.into();
        let mut context = ResolutionContext::new();
        let result = self.resolve_in(&mut context, &type_name, overrides);
        if let Err(err) = &result {
            warn!(
                type_name = %type_name,
                kind = %err.kind(),
                error = %err,
                "Resolution failed"
            );
        }
        result
    }

    /// Build a fresh instance without overrides
    pub fn make_default(&self, type_name: impl Into<TypeName>) -> Result<Value, ResolutionError> {
        self.make(type_name, Overrides::new())
    }

    /// Build a fresh instance and downcast it to `T`
    pub fn make_as<T: Object>(
        &self,
        type_name: impl Into<TypeName>,
        overrides: Overrides,
    ) -> Result<Arc<T>, ResolutionError> {
        let type_name = type_name.into();
        let value = self.make(type_name.clone(), overrides)?;
        value.downcast::<T>().ok_or_else(|| {
            ResolutionError::construction(
                type_name,
                ConstructError::TypeMismatch {
                    name: "<instance>".to_string(),
                    expected: std::any::type_name::<T>(),
                    actual: value.type_name(),
                },
            )
        })
    }

    /// Resolve `type_name` inside an existing context
    ///
    /// Pushes `overrides` as a new scope for the duration of the call; the
    /// scope and any build stack entries are gone again when this returns,
    /// whether it succeeded or not.
    pub fn resolve_in(
        &self,
        context: &mut ResolutionContext,
        type_name: &TypeName,
        overrides: Overrides,
    ) -> Result<Value, ResolutionError> {
        context.with_overrides(overrides, |context| self.build(context, type_name))
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
