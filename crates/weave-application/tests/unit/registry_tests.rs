//! Tests for linked type registrations

use weave_application::registry::{TYPE_REGISTRATIONS, TypeRegistration};
use weave_application::{Container, TypeRegistry, list_registered_types};
use weave_domain::value_objects::{TypeDescriptor, Value};

use std::sync::Arc;

#[derive(Debug)]
struct LinkedClock;

#[linkme::distributed_slice(TYPE_REGISTRATIONS)]
static LINKED_CLOCK: TypeRegistration = TypeRegistration {
    name: "LinkedClock",
    description: "Clock registered through the linked slice",
    describe: || TypeDescriptor::concrete("LinkedClock", |_| Ok(Value::new(LinkedClock))),
};

#[test]
fn test_linked_registration_is_listed() {
    let types = list_registered_types();

    assert!(
        types.iter().any(|(name, _)| *name == "LinkedClock"),
        "LinkedClock should be registered. Available: {types:?}"
    );
}

#[test]
fn test_linked_registry_resolves_linked_type() {
    let registry = TypeRegistry::from_linked();
    assert!(registry.contains("LinkedClock"));

    let container = Container::new(Arc::new(registry));
    let clock = container.make_default("LinkedClock").unwrap();

    assert!(clock.is::<LinkedClock>());
}
