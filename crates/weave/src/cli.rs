//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `weave types` | List linked type registrations |
//! | `weave make <TYPE> [--with name=value]...` | Resolve a type and print the graph |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use weave_application::list_registered_types;
use weave_domain::error::Result;
use weave_domain::value_objects::{Overrides, Value};
use weave_infrastructure::bootstrap::build_container;
use weave_infrastructure::config::{AppConfig, ConfigLoader};
use weave_infrastructure::logging::init_logging;

/// Command line interface for Weave
#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(about = "Weave - Recursive object resolution engine")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List linked type registrations
    Types,

    /// Resolve a type and print the constructed object graph
    Make {
        /// Name of the type to build
        type_name: String,

        /// Parameter override, `name=value`; integers are passed as int
        #[arg(long = "with", value_name = "NAME=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, String)>,
    },
}

/// Load configuration, initialize logging and run the command
pub fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    init_logging(&config.logging)?;
    execute(&cli.command, &config)
}

/// Run a command against an already loaded configuration
pub fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Types => Ok(render_types()),
        Command::Make {
            type_name,
            overrides,
        } => {
            let container = build_container(config);
            let overrides: Overrides = overrides
                .iter()
                .map(|(name, raw)| (name.clone(), override_value(raw)))
                .collect();
            debug!(type_name = %type_name, overrides = overrides.len(), "Resolving from CLI");
            let instance = container.make(type_name.as_str(), overrides)?;
            Ok(format!("{instance:#?}"))
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

fn render_types() -> String {
    let types = list_registered_types();
    if types.is_empty() {
        return "No types registered".to_string();
    }
    let width = types.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    types
        .iter()
        .map(|(name, description)| format!("{name:<width$}  {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a `name=value` override argument
pub fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}

/// Convert a raw override to a value: `i64` when it parses, `String` otherwise
pub fn override_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(number) => Value::new(number),
        Err(_) => Value::new(raw.to_string()),
    }
}
