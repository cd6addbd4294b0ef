//! TypeDescriptor Tests

use weave_domain::error::ConstructError;
use weave_domain::value_objects::{
    Arguments, Parameter, ParameterKind, TypeCategory, TypeDescriptor, TypeName, Value,
};

#[derive(Debug)]
struct Sys;

#[test]
fn test_concrete_descriptor_is_instantiable() {
    let descriptor = TypeDescriptor::concrete("Sys", |_| Ok(Value::new(Sys)));

    assert!(descriptor.is_instantiable());
    assert!(!descriptor.has_parameters());
    assert_eq!(descriptor.category(), TypeCategory::Concrete);
    assert!(descriptor.construct(&Arguments::new()).unwrap().is::<Sys>());
}

#[test]
fn test_non_concrete_categories_are_not_instantiable() {
    for descriptor in [
        TypeDescriptor::interface("Logger"),
        TypeDescriptor::abstract_type("Base"),
        TypeDescriptor::with_category("Mixin", TypeCategory::Trait),
        TypeDescriptor::with_category("Registry", TypeCategory::NonPublicConstructor),
    ] {
        assert!(!descriptor.is_instantiable(), "{descriptor:?}");
    }
}

#[test]
fn test_construct_without_constructor_fails() {
    let err = TypeDescriptor::interface("Logger")
        .construct(&Arguments::new())
        .unwrap_err();

    assert!(matches!(err, ConstructError::Failed { .. }));
}

#[test]
fn test_parameters_keep_declaration_order() {
    let descriptor = TypeDescriptor::concrete("Mailer", |_| Ok(Value::new(())))
        .with_parameter(Parameter::object("transport", "Transport"))
        .with_parameter(Parameter::primitive("port", "int").with_default(Value::new(25_i64)))
        .with_parameter(Parameter::untyped("extra"));

    let parameters = descriptor.parameters();
    assert_eq!(parameters.len(), 3);
    assert_eq!(
        parameters[0].kind(),
        &ParameterKind::Object(TypeName::from("Transport"))
    );
    assert_eq!(
        parameters[1].kind(),
        &ParameterKind::Primitive("int".to_string())
    );
    assert!(parameters[1].default_value().is_some());
    assert_eq!(parameters[2].kind(), &ParameterKind::Untyped);
    assert!(parameters[2].default_value().is_none());
}
