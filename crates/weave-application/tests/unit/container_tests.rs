//! Tests for successful resolution

use std::sync::Arc;

use weave_application::ResolutionContext;
use weave_domain::value_objects::{Overrides, TypeName, Value};

use crate::test_utils::{File, Log, Mailer, Sys, fixture_container};

#[test]
fn test_zero_parameter_type_is_fresh_each_call() {
    let container = fixture_container();

    let first = container.make_default("Sys").unwrap();
    let second = container.make_default("Sys").unwrap();

    assert!(first.is::<Sys>());
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_log_file_sys_graph_is_wired_without_overrides() {
    let container = fixture_container();

    let log = container.make_as::<Log>("Log", Overrides::new()).unwrap();

    assert_eq!(format!("{log:?}"), "Log { file: File { sys: Sys } }");
}

#[test]
fn test_repeated_calls_build_distinct_graphs() {
    let container = fixture_container();

    let first = container.make_as::<Log>("Log", Overrides::new()).unwrap();
    let second = container.make_as::<Log>("Log", Overrides::new()).unwrap();

    assert!(!Arc::ptr_eq(&first.file, &second.file));
    assert!(!Arc::ptr_eq(&first.file.sys, &second.file.sys));
}

#[test]
fn test_primitive_default_is_used_when_not_overridden() {
    let container = fixture_container();
    let overrides = Overrides::new().with("port", Value::new(25_i64));

    let mailer = container.make_as::<Mailer>("Mailer", overrides).unwrap();

    assert_eq!(
        *mailer,
        Mailer {
            host: "localhost".to_string(),
            port: 25,
        }
    );
}

#[test]
fn test_build_stack_is_empty_after_success() {
    let container = fixture_container();
    let mut context = ResolutionContext::new();

    let value = container
        .resolve_in(&mut context, &TypeName::from("Log"), Overrides::new())
        .unwrap();

    assert!(value.is::<Log>());
    assert!(context.build_stack().is_empty());
    assert_eq!(context.override_depth(), 0);
}

#[test]
fn test_concurrent_make_calls_share_one_container() {
    let container = fixture_container();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let file = container.make_as::<File>("File", Overrides::new()).unwrap();
                    assert_eq!(format!("{file:?}"), "File { sys: Sys }");
                }
            });
        }
    });
}
