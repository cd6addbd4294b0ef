//! Constructor parameter descriptors

use super::{TypeName, Value};

/// Declared type of a constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// A constructible type, resolved by recursive construction
    Object(TypeName),
    /// A scalar type (string, int, ...) the engine cannot synthesize
    Primitive(String),
    /// No declared type
    Untyped,
}

/// One constructor parameter: name, declared type and optional default
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    default: Option<Value>,
}

impl Parameter {
    /// Parameter whose declared type is a constructible type
    pub fn object(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self::with_kind(name, ParameterKind::Object(type_name.into()))
    }

    /// Parameter with a scalar declared type such as `string` or `int`
    pub fn primitive(name: impl Into<String>, scalar: impl Into<String>) -> Self {
        Self::with_kind(name, ParameterKind::Primitive(scalar.into()))
    }

    /// Parameter without a declared type
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::with_kind(name, ParameterKind::Untyped)
    }

    fn with_kind(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// Declare a default value
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// Declared default value, if any
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
