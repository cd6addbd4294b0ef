//! Dependency resolution over a constructor signature

use tracing::trace;
use weave_domain::error::ResolutionError;
use weave_domain::value_objects::{Arguments, Overrides, ParameterKind, TypeDescriptor};

use super::primitive::resolve_primitive;
use super::{Container, ResolutionContext};

impl Container {
    /// Resolve every parameter of `descriptor` in declaration order
    ///
    /// Stops at the first failure.
    pub(super) fn resolve_dependencies(
        &self,
        context: &mut ResolutionContext,
        descriptor: &TypeDescriptor,
    ) -> Result<Arguments, ResolutionError> {
        let mut arguments = Arguments::new();

        for parameter in descriptor.parameters() {
            let name = parameter.name();

            if let Some(value) = context
                .override_for(name, self.options.inherit_overrides)
                .cloned()
            {
                trace!(type_name = %descriptor.name(), parameter = name, "Using override");
                arguments.push(name, value);
                continue;
            }

            let value = match parameter.kind() {
                ParameterKind::Object(dependency) => {
                    trace!(
                        type_name = %descriptor.name(),
                        parameter = name,
                        dependency = %dependency,
                        "Resolving object dependency"
                    );
                    self.resolve_in(context, dependency, Overrides::new())?
                }
                ParameterKind::Primitive(_) | ParameterKind::Untyped => {
                    resolve_primitive(descriptor.name(), parameter)?
                }
            };
            arguments.push(name, value);
        }

        Ok(arguments)
    }
}
