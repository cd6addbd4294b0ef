//! Resolved constructor arguments

use super::{Object, Value};
use crate::error::ConstructError;
use std::sync::Arc;

/// Arguments handed to a constructor, in parameter declaration order
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the value for the next parameter
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.values.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a parameter position
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index).map(|(_, value)| value)
    }

    /// Value for a named parameter
    pub fn by_name(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }

    /// Parameter names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Share the named argument as an `Arc<T>`
    pub fn object<T: Object>(&self, name: &str) -> Result<Arc<T>, ConstructError> {
        let value = self.require(name)?;
        value
            .downcast::<T>()
            .ok_or_else(|| mismatch::<T>(name, value))
    }

    /// Clone the named argument out as a `T`
    pub fn value<T: Object + Clone>(&self, name: &str) -> Result<T, ConstructError> {
        let value = self.require(name)?;
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| mismatch::<T>(name, value))
    }

    fn require(&self, name: &str) -> Result<&Value, ConstructError> {
        self.by_name(name)
            .ok_or_else(|| ConstructError::MissingArgument {
                name: name.to_string(),
            })
    }
}

fn mismatch<T>(name: &str, value: &Value) -> ConstructError {
    ConstructError::TypeMismatch {
        name: name.to_string(),
        expected: std::any::type_name::<T>(),
        actual: value.type_name(),
    }
}
