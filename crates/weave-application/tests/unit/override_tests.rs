//! Tests for parameter override precedence and scoping

use std::sync::Arc;

use weave_domain::error::{ConstructError, ResolutionError, ResolutionErrorKind};
use weave_domain::value_objects::{Overrides, ResolverOptions, Value};

use crate::test_utils::{File, Log, Mailer, Notifier, Outer, Sys, fixture_container};

#[test]
fn test_override_beats_automatic_object_resolution() {
    let container = fixture_container();
    let explicit = Arc::new(File { sys: Arc::new(Sys) });
    let overrides = Overrides::new().with("file", Value::from_arc(Arc::clone(&explicit)));

    let log = container.make_as::<Log>("Log", overrides).unwrap();

    assert!(Arc::ptr_eq(&log.file, &explicit));
}

#[test]
fn test_override_satisfies_interface_parameter() {
    let container = fixture_container();
    let overrides = Overrides::new().with("transport", Value::new("smtp".to_string()));

    let notifier = container.make_as::<Notifier>("Notifier", overrides).unwrap();

    assert_eq!(
        notifier.transport.downcast_ref::<String>().map(String::as_str),
        Some("smtp")
    );
}

#[test]
fn test_override_beats_primitive_default() {
    let container = fixture_container();
    let overrides = Overrides::new()
        .with("host", Value::new("mail.internal".to_string()))
        .with("port", Value::new(587_i64));

    let mailer = container.make_as::<Mailer>("Mailer", overrides).unwrap();

    assert_eq!(mailer.host, "mail.internal");
    assert_eq!(mailer.port, 587);
}

#[test]
fn test_override_is_passed_verbatim_without_type_check() {
    let container = fixture_container();
    let overrides = Overrides::new().with("file", Value::new("not a file".to_string()));

    let err = container.make("Log", overrides).unwrap_err();

    assert_eq!(err.kind(), ResolutionErrorKind::Construction);
    assert!(matches!(
        err,
        ResolutionError::Construction {
            source: ConstructError::TypeMismatch { .. },
            ..
        }
    ));
}

#[test]
fn test_overrides_apply_after_nested_resolution() {
    let container = fixture_container();
    let overrides = Overrides::new().with("port", Value::new(9_i64));

    let outer = container.make_as::<Outer>("Outer", overrides).unwrap();

    assert_eq!(outer.port, 9);
}

#[test]
fn test_nested_calls_do_not_see_outer_overrides() {
    let container = fixture_container();
    let overrides = Overrides::new().with("port", Value::new(9_i64));

    let outer = container.make_as::<Outer>("Outer", overrides).unwrap();

    assert_eq!(outer.inner.port, 1);
}

#[test]
fn test_inherited_overrides_reach_nested_calls() {
    let container = fixture_container().with_options(ResolverOptions {
        inherit_overrides: true,
        ..ResolverOptions::default()
    });
    let overrides = Overrides::new().with("port", Value::new(9_i64));

    let outer = container.make_as::<Outer>("Outer", overrides).unwrap();

    assert_eq!(outer.inner.port, 9);
    assert_eq!(outer.port, 9);
}

#[test]
fn test_overrides_do_not_persist_across_calls() {
    let container = fixture_container();
    container
        .make("Mailer", Overrides::new().with("port", Value::new(25_i64)))
        .unwrap();

    let err = container.make_default("Mailer").unwrap_err();

    assert_eq!(err.kind(), ResolutionErrorKind::Unresolvable);
}
