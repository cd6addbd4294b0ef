//! Builder: introspect, guard, push, resolve, pop, construct

use tracing::debug;
use weave_domain::error::ResolutionError;
use weave_domain::value_objects::{Arguments, TypeName, Value};

use super::{Container, ResolutionContext};

impl Container {
    pub(super) fn build(
        &self,
        context: &mut ResolutionContext,
        type_name: &TypeName,
    ) -> Result<Value, ResolutionError> {
        let descriptor = self
            .introspector
            .introspect(type_name)
            .map_err(|source| ResolutionError::not_found(type_name.clone(), source))?;

        if !descriptor.is_instantiable() {
            return Err(ResolutionError::not_instantiable(
                type_name.clone(),
                context.build_stack(),
            ));
        }

        if self.options.detect_cycles && context.is_building(type_name) {
            return Err(ResolutionError::circular(
                type_name.clone(),
                context.build_stack(),
            ));
        }

        // With detection on every chain is bounded by the number of distinct types.
        let limit = self.options.max_depth;
        if !self.options.detect_cycles && limit > 0 && context.build_stack().len() >= limit {
            return Err(ResolutionError::depth_exceeded(limit, context.build_stack()));
        }

        let arguments = context.building(type_name, |context| {
            debug!(
                type_name = %type_name,
                depth = context.build_stack().len(),
                parameters = descriptor.parameters().len(),
                "Building type"
            );
            if !descriptor.has_parameters() {
                return Ok(Arguments::new());
            }
            self.resolve_dependencies(context, &descriptor)
        })?;

        descriptor
            .construct(&arguments)
            .map_err(|source| ResolutionError::construction(type_name.clone(), source))
    }
}
