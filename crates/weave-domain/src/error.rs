//! Error handling types
//!
//! Two layers of errors live here:
//!
//! - [`ResolutionError`] is what the resolution engine returns. Every variant
//!   names the type (or parameter) that failed and, where relevant, the chain
//!   of types that were mid-construction at the time.
//! - [`Error`] is the umbrella error used by the infrastructure layer
//!   (configuration, logging, I/O), which wraps resolution failures.

use crate::constants::BUILD_CHAIN_SEPARATOR;
use crate::value_objects::TypeName;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Weave
#[derive(Error, Debug)]
pub enum Error {
    /// Resolution engine failure
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// The wrapped resolution error, if this is one
    pub fn as_resolution(&self) -> Option<&ResolutionError> {
        match self {
            Self::Resolution(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure of the type-introspection facility
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    /// Nothing is registered under the requested name
    #[error("type [{name}] is not registered{hint}", hint = available_hint(.available))]
    UnknownType {
        /// Requested type name
        name: String,
        /// Names that are registered, for diagnostics
        available: Vec<String>,
    },

    /// The identifier cannot name a type at all
    #[error("{name:?} is not a valid type identifier")]
    InvalidName {
        /// The rejected identifier
        name: String,
    },
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(" (registered: {})", available.join(BUILD_CHAIN_SEPARATOR))
    }
}

/// Failure reported by a constructor while assembling an instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The constructor asked for an argument that was not supplied
    #[error("missing argument [{name}]")]
    MissingArgument {
        /// Parameter name
        name: String,
    },

    /// The supplied argument is not of the type the constructor expects
    #[error("argument [{name}] expected {expected}, got {actual}")]
    TypeMismatch {
        /// Parameter name
        name: String,
        /// Type the constructor asked for
        expected: &'static str,
        /// Type of the supplied value
        actual: &'static str,
    },

    /// Constructor-specific failure
    #[error("{message}")]
    Failed {
        /// Description of the failure
        message: String,
    },
}

impl ConstructError {
    /// Create a constructor-specific failure
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Classification of a [`ResolutionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionErrorKind {
    /// The type identifier could not be introspected
    NotFound,
    /// The type exists but cannot be constructed
    NotInstantiable,
    /// A primitive parameter has neither an override nor a default
    Unresolvable,
    /// The type is already being built further up the chain
    CircularDependency,
    /// Nesting went past the configured limit
    DepthExceeded,
    /// The constructor itself rejected its arguments
    Construction,
}

impl std::fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::NotInstantiable => "not_instantiable",
            Self::Unresolvable => "unresolvable",
            Self::CircularDependency => "circular_dependency",
            Self::DepthExceeded => "depth_exceeded",
            Self::Construction => "construction",
        };
        f.write_str(name)
    }
}

/// Error returned by the resolution engine
///
/// Errors are produced at the deepest point of failure and propagate to the
/// caller of `make` unchanged.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The type identifier could not be introspected
    #[error("Target type [{type_name}] does not exist")]
    NotFound {
        /// Requested type
        type_name: TypeName,
        /// Introspection failure
        #[source]
        source: IntrospectionError,
    },

    /// The type is an interface, abstract, or otherwise not constructible
    ///
    /// `chain` holds every type that was mid-construction followed by the
    /// failing type, or just the failing type for a top-level request.
    #[error("Target [{path}] is not instantiable", path = join_chain(.chain))]
    NotInstantiable {
        /// The non-instantiable type
        type_name: TypeName,
        /// Types being built, outermost first, ending with `type_name`
        chain: Vec<TypeName>,
    },

    /// A primitive parameter has no override and no default value
    #[error("Unresolvable dependency resolving [${parameter}] in class {declaring_type}")]
    Unresolvable {
        /// Parameter name
        parameter: String,
        /// Type whose constructor declares the parameter
        declaring_type: TypeName,
    },

    /// The type is already being built further up the chain
    #[error("Circular dependency detected while building [{path}]", path = join_chain(.chain))]
    CircularDependency {
        /// The type requested a second time
        type_name: TypeName,
        /// Types being built, outermost first, ending with `type_name`
        chain: Vec<TypeName>,
    },

    /// Nesting went past the configured limit
    #[error(
        "Maximum resolution depth of {limit} exceeded while building [{path}]",
        path = join_chain(.chain)
    )]
    DepthExceeded {
        /// Configured limit
        limit: usize,
        /// Types being built, outermost first
        chain: Vec<TypeName>,
    },

    /// The constructor rejected the resolved arguments
    #[error("Failed to construct [{type_name}]: {source}")]
    Construction {
        /// Type being constructed
        type_name: TypeName,
        /// Constructor failure
        #[source]
        source: ConstructError,
    },
}

impl ResolutionError {
    /// Classify this error
    pub fn kind(&self) -> ResolutionErrorKind {
        match self {
            Self::NotFound { .. } => ResolutionErrorKind::NotFound,
            Self::NotInstantiable { .. } => ResolutionErrorKind::NotInstantiable,
            Self::Unresolvable { .. } => ResolutionErrorKind::Unresolvable,
            Self::CircularDependency { .. } => ResolutionErrorKind::CircularDependency,
            Self::DepthExceeded { .. } => ResolutionErrorKind::DepthExceeded,
            Self::Construction { .. } => ResolutionErrorKind::Construction,
        }
    }

    /// Create a not-found error
    pub fn not_found(type_name: TypeName, source: IntrospectionError) -> Self {
        Self::NotFound { type_name, source }
    }

    /// Create a not-instantiable error from the current build stack
    pub fn not_instantiable(type_name: TypeName, build_stack: &[TypeName]) -> Self {
        let mut chain = build_stack.to_vec();
        chain.push(type_name.clone());
        Self::NotInstantiable { type_name, chain }
    }

    /// Create an unresolvable-primitive error
    pub fn unresolvable<S: Into<String>>(parameter: S, declaring_type: TypeName) -> Self {
        Self::Unresolvable {
            parameter: parameter.into(),
            declaring_type,
        }
    }

    /// Create a circular-dependency error from the current build stack
    pub fn circular(type_name: TypeName, build_stack: &[TypeName]) -> Self {
        let mut chain = build_stack.to_vec();
        chain.push(type_name.clone());
        Self::CircularDependency { type_name, chain }
    }

    /// Create a depth-exceeded error from the current build stack
    pub fn depth_exceeded(limit: usize, build_stack: &[TypeName]) -> Self {
        Self::DepthExceeded {
            limit,
            chain: build_stack.to_vec(),
        }
    }

    /// Create a construction error
    pub fn construction(type_name: TypeName, source: ConstructError) -> Self {
        Self::Construction { type_name, source }
    }

    /// Chain of types being built when the error occurred, if recorded
    pub fn chain(&self) -> &[TypeName] {
        match self {
            Self::NotInstantiable { chain, .. }
            | Self::CircularDependency { chain, .. }
            | Self::DepthExceeded { chain, .. } => chain,
            _ => &[],
        }
    }
}

fn join_chain(chain: &[TypeName]) -> String {
    chain
        .iter()
        .map(TypeName::as_str)
        .collect::<Vec<_>>()
        .join(BUILD_CHAIN_SEPARATOR)
}
