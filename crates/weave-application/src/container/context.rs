//! Per-call resolution state

use weave_domain::value_objects::{Overrides, TypeName, Value};

/// Build stack and override scopes of one top-level `make` call
///
/// Both stacks are only changed through [`with_overrides`](Self::with_overrides)
/// and [`building`](Self::building), which pop what they pushed before
/// returning.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    build_stack: Vec<TypeName>,
    overrides: Vec<Overrides>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Types currently mid-construction, outermost first
    pub fn build_stack(&self) -> &[TypeName] {
        &self.build_stack
    }

    /// Number of active override scopes, one per nested `make`
    pub fn override_depth(&self) -> usize {
        self.overrides.len()
    }

    /// True if `type_name` is already being built
    pub fn is_building(&self, type_name: &TypeName) -> bool {
        self.build_stack.contains(type_name)
    }

    /// Override for the named parameter
    ///
    /// Only the innermost scope is consulted unless `inherit` is set, in
    /// which case outer scopes are searched innermost first.
    pub fn override_for(&self, name: &str, inherit: bool) -> Option<&Value> {
        let mut scopes = self.overrides.iter().rev();
        if inherit {
            scopes.find_map(|scope| scope.get(name))
        } else {
            scopes.next().and_then(|scope| scope.get(name))
        }
    }

    pub(crate) fn with_overrides<R>(
        &mut self,
        overrides: Overrides,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.overrides.push(overrides);
        let result = f(self);
        self.overrides.pop();
        result
    }

    pub(crate) fn building<R>(&mut self, type_name: &TypeName, f: impl FnOnce(&mut Self) -> R) -> R {
        self.build_stack.push(type_name.clone());
        let result = f(self);
        self.build_stack.pop();
        result
    }
}
