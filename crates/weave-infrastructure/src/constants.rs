//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `weave_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "weave.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "weave";

/// Environment variable prefix for configuration (`WEAVE__RESOLVER__MAX_DEPTH`)
pub const CONFIG_ENV_PREFIX: &str = "WEAVE__";

/// Separator for nested configuration keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WEAVE_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "weave";
