//! Domain layer constants

/// Default maximum nesting of `make` calls before resolution is aborted
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 256;

/// Separator used when rendering a chain of types being built
pub const BUILD_CHAIN_SEPARATOR: &str = ", ";
