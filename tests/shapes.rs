//! Shape-strategy behaviors: required/optional, nesting, normalized text.

mod common;

use common::*;
use serde_json::json;
use typeweave::{Outcome, Signature, TypeWrapper, WrapError, shapes};

fn ready(outcome: Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Ready(value) => value,
        Outcome::Deferred(_) => panic!("expected a ready outcome"),
    }
}

#[test]
fn test_shorthand_accepts_matching_arguments() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::number(), shapes::number()]),
        )
        .unwrap();

    let outcome = wrapped.call(&[json!(2), json!(2)]).unwrap();
    assert_eq!(ready(outcome), json!(4));
}

#[test]
fn test_mismatching_arguments_fail_with_normalized_text() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::number(), shapes::number()]),
        )
        .unwrap();

    let err = wrapped.call(&[json!(2), json!("2")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "add (argument 2) (number) expected an input value of type \"number\" but instead received \"string\"",
    );

    let err = wrapped.call(&[json!(2), json!({})]).unwrap_err();
    assert!(
        err.to_string()
            .contains("expected an input value of type \"number\"")
    );
}

#[test]
fn test_missing_arguments_fail_the_required_check() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::number(), shapes::number()]),
        )
        .unwrap();

    let err = wrapped.call(&[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "add (argument 1) expected a required input value, but instead received \"undefined\"",
    );

    let err = wrapped.call(&[json!(2)]).unwrap_err();
    assert!(err.to_string().starts_with("add (argument 2)"));
    assert!(err.to_string().contains("expected a required input value"));
}

#[test]
fn test_explicit_null_reports_null_not_undefined() {
    let wrapped = TypeWrapper::shaped()
        .wrap(shape_add_target(), Signature::shorthand([shapes::number()]))
        .unwrap();

    let err = wrapped.call(&[json!(null)]).unwrap_err();
    assert!(err.to_string().contains("but instead received \"null\""));
}

#[test]
fn test_optional_descriptors_accept_missing_and_null() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::number().optional(), shapes::number().optional()]),
        )
        .unwrap();

    assert!(wrapped.call(&[]).is_ok());
    assert!(wrapped.call(&[json!(1)]).is_ok());
    assert!(wrapped.call(&[json!(1), json!(null)]).is_ok());

    // Present non-null values are still kind-checked.
    assert!(wrapped.call(&[json!("1")]).is_err());
}

#[test]
fn test_nested_object_fields_fail_with_bracketed_names() {
    let point = shapes::object_of([("x", shapes::number()), ("y", shapes::number())]);
    let wrapped = TypeWrapper::shaped()
        .wrap(shape_add_target(), Signature::shorthand([point]))
        .unwrap();

    assert!(wrapped.call(&[json!({"x": 1, "y": 2})]).is_ok());
    // Undeclared fields are ignored.
    assert!(wrapped.call(&[json!({"x": 1, "y": 2, "z": "?"})]).is_ok());

    let err = wrapped.call(&[json!({"x": 1, "y": "two"})]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "add (argument 1) (shape[y]) expected an input value of type \"number\" but instead received \"string\"",
    );

    let err = wrapped.call(&[json!({"x": 1})]).unwrap_err();
    assert!(err.to_string().contains("expected a required input value"));

    let err = wrapped.call(&[json!(5)]).unwrap_err();
    assert!(
        err.to_string()
            .contains("expected an input value of type \"shape\"")
    );
}

#[test]
fn test_array_elements_fail_with_indexed_names() {
    let numbers = shapes::array_of(shapes::number());
    let wrapped = TypeWrapper::shaped()
        .wrap(shape_add_target(), Signature::shorthand([numbers]))
        .unwrap();

    assert!(wrapped.call(&[json!([1, 2, 3])]).is_ok());
    assert!(wrapped.call(&[json!([])]).is_ok());

    let err = wrapped.call(&[json!([1, "two", 3])]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "add (argument 1) (array[1]) expected an input value of type \"number\" but instead received \"string\"",
    );
}

#[test]
fn test_broken_resolver_fails_after_the_target_ran() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_broken_target(),
            Signature::longhand([shapes::number(), shapes::number()], Some(shapes::number())),
        )
        .unwrap();

    let err = wrapped.call(&[json!(2), json!(2)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "add (number) expected a return value of type \"number\" but instead returned \"string\"",
    );
}

#[test]
fn test_failing_argument_check_never_runs_the_target() {
    let (target, calls) = probe_shape_target();
    let wrapped = TypeWrapper::shaped()
        .wrap(
            target,
            Signature::shorthand([shapes::number(), shapes::number()]),
        )
        .unwrap();

    wrapped.call(&[json!("2"), json!(2)]).unwrap_err();
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn test_unrecognized_oracle_diagnostics_surface_verbatim() {
    // Uppercase names fall outside the formatter's token charset, so the
    // raw oracle text must come through unmodified.
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::number().named("Widget")]),
        )
        .unwrap();

    let err = wrapped.call(&[json!("x")]).unwrap_err();
    assert!(matches!(err, WrapError::Oracle { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid param `Widget` of type `string` supplied to `target`, expected `number`.",
    );
}

#[test]
fn test_valid_results_pass_through_unchanged() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::integer(), shapes::integer()])
                .returning(shapes::integer()),
        )
        .unwrap();

    let outcome = wrapped.call(&[json!(40), json!(2)]).unwrap();
    assert_eq!(ready(outcome), json!(42));
}
