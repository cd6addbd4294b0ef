//! Demo types registered through the linked registry
//!
//! ```text
//! Log(File file) → File(Sys sys) → Sys()
//! Mailer(string host = "localhost", int port)
//! Notifier(Transport transport)      Transport: interface
//! ```

use std::sync::Arc;

use linkme::distributed_slice;
use weave_application::registry::{TYPE_REGISTRATIONS, TypeRegistration};
use weave_domain::value_objects::{Parameter, TypeDescriptor, Value};

#[derive(Debug)]
pub struct Sys;

#[derive(Debug)]
pub struct File {
    pub sys: Arc<Sys>,
}

#[derive(Debug)]
pub struct Log {
    pub file: Arc<File>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mailer {
    pub host: String,
    pub port: i64,
}

#[derive(Debug)]
pub struct Notifier {
    pub transport: Value,
}

#[distributed_slice(TYPE_REGISTRATIONS)]
static SYS: TypeRegistration = TypeRegistration {
    name: "Sys",
    description: "System handle without dependencies",
    describe: || TypeDescriptor::concrete("Sys", |_| Ok(Value::new(Sys))),
};

#[distributed_slice(TYPE_REGISTRATIONS)]
static FILE: TypeRegistration = TypeRegistration {
    name: "File",
    description: "File backed by a Sys handle",
    describe: || {
        TypeDescriptor::concrete("File", |args| {
            Ok(Value::new(File {
                sys: args.object("sys")?,
            }))
        })
        .with_parameter(Parameter::object("sys", "Sys"))
    },
};

#[distributed_slice(TYPE_REGISTRATIONS)]
static LOG: TypeRegistration = TypeRegistration {
    name: "Log",
    description: "Log writing to a File",
    describe: || {
        TypeDescriptor::concrete("Log", |args| {
            Ok(Value::new(Log {
                file: args.object("file")?,
            }))
        })
        .with_parameter(Parameter::object("file", "File"))
    },
};

#[distributed_slice(TYPE_REGISTRATIONS)]
static MAILER: TypeRegistration = TypeRegistration {
    name: "Mailer",
    description: "Mailer(string host = \"localhost\", int port)",
    describe: || {
        TypeDescriptor::concrete("Mailer", |args| {
            Ok(Value::new(Mailer {
                host: args.value("host")?,
                port: args.value("port")?,
            }))
        })
        .with_parameter(
            Parameter::primitive("host", "string")
                .with_default(Value::new("localhost".to_string())),
        )
        .with_parameter(Parameter::primitive("port", "int"))
    },
};

#[distributed_slice(TYPE_REGISTRATIONS)]
static TRANSPORT: TypeRegistration = TypeRegistration {
    name: "Transport",
    description: "Transport interface (not instantiable)",
    describe: || TypeDescriptor::interface("Transport"),
};

#[distributed_slice(TYPE_REGISTRATIONS)]
static NOTIFIER: TypeRegistration = TypeRegistration {
    name: "Notifier",
    description: "Notifier depending on the Transport interface",
    describe: || {
        TypeDescriptor::concrete("Notifier", |args| {
            let transport = args
                .by_name("transport")
                .cloned()
                .ok_or_else(|| weave_domain::error::ConstructError::MissingArgument {
                    name: "transport".to_string(),
                })?;
            Ok(Value::new(Notifier { transport }))
        })
        .with_parameter(Parameter::object("transport", "Transport"))
    },
};
