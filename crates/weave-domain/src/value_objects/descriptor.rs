//! Type descriptors
//!
//! A [`TypeDescriptor`] is what the introspection facility yields for a type:
//! whether it can be instantiated, its ordered constructor parameters, and
//! the constructor itself.

use super::{Arguments, Parameter, TypeName, Value};
use crate::error::ConstructError;
use std::fmt;
use std::sync::Arc;

/// Constructor invoked with arguments in parameter declaration order
pub type Constructor = Arc<dyn Fn(&Arguments) -> Result<Value, ConstructError> + Send + Sync>;

/// Kind of type, which decides whether it can be instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// A concrete type with a public constructor
    Concrete,
    /// An interface
    Interface,
    /// An abstract type
    Abstract,
    /// A trait-like mixin
    Trait,
    /// A concrete type whose constructor is not public
    NonPublicConstructor,
}

/// Everything the engine needs to know to construct a type
#[derive(Clone)]
pub struct TypeDescriptor {
    name: TypeName,
    category: TypeCategory,
    parameters: Vec<Parameter>,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Concrete type built by `constructor`
    pub fn concrete<F>(name: impl Into<TypeName>, constructor: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Value, ConstructError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            category: TypeCategory::Concrete,
            parameters: Vec::new(),
            constructor: Some(Arc::new(constructor)),
        }
    }

    /// Interface type
    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self::with_category(name, TypeCategory::Interface)
    }

    /// Abstract type
    pub fn abstract_type(name: impl Into<TypeName>) -> Self {
        Self::with_category(name, TypeCategory::Abstract)
    }

    /// Type of the given category without a constructor
    pub fn with_category(name: impl Into<TypeName>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            category,
            parameters: Vec::new(),
            constructor: None,
        }
    }

    /// Append a constructor parameter
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    /// Constructor parameters in declaration order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// True for concrete types that carry a constructor
    pub fn is_instantiable(&self) -> bool {
        self.category == TypeCategory::Concrete && self.constructor.is_some()
    }

    /// Run the constructor
    pub fn construct(&self, arguments: &Arguments) -> Result<Value, ConstructError> {
        match &self.constructor {
            Some(constructor) => constructor(arguments),
            None => Err(ConstructError::failed(format!(
                "type [{}] has no constructor",
                self.name
            ))),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("parameters", &self.parameters)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}
