//! Resolver behaviour options

use crate::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use serde::{Deserialize, Serialize};

/// Tunables for the resolution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Fail with a circular-dependency error when a type is requested while
    /// it is already being built
    pub detect_cycles: bool,

    /// Maximum nesting of `make` calls while `detect_cycles` is off; 0
    /// disables the limit
    pub max_depth: usize,

    /// Fall back to outer override scopes when the innermost one has no
    /// entry for a parameter
    pub inherit_overrides: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
            inherit_overrides: false,
        }
    }
}
