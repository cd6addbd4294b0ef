//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Wires configuration and the linked registry into a `Container` |
//! | [`error_ext`] | Context extension methods for errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_container, build_container_with};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
