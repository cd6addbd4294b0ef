//! Primitive parameters: declared default or failure

use tracing::trace;
use weave_domain::error::ResolutionError;
use weave_domain::value_objects::{Parameter, TypeName, Value};

pub(super) fn resolve_primitive(
    declaring_type: &TypeName,
    parameter: &Parameter,
) -> Result<Value, ResolutionError> {
    match parameter.default_value() {
        Some(default) => {
            trace!(type_name = %declaring_type, parameter = parameter.name(), "Using default value");
            Ok(default.clone())
        }
        None => Err(ResolutionError::unresolvable(
            parameter.name(),
            declaring_type.clone(),
        )),
    }
}
