//! Value objects describing constructible types and resolved values

pub mod arguments;
pub mod descriptor;
pub mod options;
pub mod overrides;
pub mod parameter;
pub mod type_name;
pub mod value;

pub use arguments::Arguments;
pub use descriptor::{Constructor, TypeCategory, TypeDescriptor};
pub use options::ResolverOptions;
pub use overrides::Overrides;
pub use parameter::{Parameter, ParameterKind};
pub use type_name::TypeName;
pub use value::{Object, Value};
