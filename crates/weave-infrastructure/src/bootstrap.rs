//! Container bootstrap
//!
//! ```text
//! TYPE_REGISTRATIONS (linkme)  ──►  TypeRegistry  ──►  Container
//!                                                        ▲
//! AppConfig.resolver  ───────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;
use weave_application::{Container, TypeRegistry};

use crate::config::AppConfig;

/// Build a container over every linked type registration
pub fn build_container(config: &AppConfig) -> Container {
    build_container_with(TypeRegistry::from_linked(), config)
}

/// Build a container over an explicit registry
pub fn build_container_with(registry: TypeRegistry, config: &AppConfig) -> Container {
    info!(
        types = registry.len(),
        detect_cycles = config.resolver.detect_cycles,
        max_depth = config.resolver.max_depth,
        inherit_overrides = config.resolver.inherit_overrides,
        "Built resolution container"
    );
    Container::new(Arc::new(registry)).with_options(config.resolver.clone())
}
