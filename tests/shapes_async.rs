//! Deferred-outcome behaviors: resolver checks at settlement, eager
//! argument validation, untouched propagation of target failures.

mod common;

use common::*;
use serde_json::json;
use typeweave::{Outcome, Signature, TypeWrapper, WrapError, shapes};

#[tokio::test]
async fn test_fulfilled_matching_values_resolve_to_the_result() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            deferred_double_target(),
            Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
        )
        .unwrap();

    let outcome = wrapped.call(&[json!(21)]).unwrap();
    assert!(!outcome.is_ready());
    assert_eq!(outcome.resolved().await.unwrap(), json!(42));
}

#[tokio::test]
async fn test_fulfilled_mismatching_values_fail_in_resolving_mode() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            deferred_broken_target(),
            Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
        )
        .unwrap();

    let err = wrapped
        .call(&[json!(21)])
        .unwrap()
        .resolved()
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "double (integer) expected a return value of type \"integer\" but instead returned \"string\"",
    );
}

#[tokio::test]
async fn test_failed_targets_propagate_without_a_resolver_check() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            deferred_failing_target(),
            Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
        )
        .unwrap();

    let err = wrapped
        .call(&[json!(21)])
        .unwrap()
        .resolved()
        .await
        .unwrap_err();

    assert!(matches!(err, WrapError::TargetFailure { .. }));
    assert_eq!(err.to_string(), "double failed: upstream unavailable");
}

#[tokio::test]
async fn test_argument_checks_run_eagerly_before_any_await() {
    let (target, calls) = probe_deferred_target();
    let wrapped = TypeWrapper::shaped()
        .wrap(
            target,
            Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
        )
        .unwrap();

    // The failure is synchronous; nothing was invoked, nothing to await.
    wrapped.call(&[json!("21")]).unwrap_err();
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_deferred_results_without_a_resolver_pass_through() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            deferred_broken_target(),
            Signature::shorthand([shapes::integer()]),
        )
        .unwrap();

    // No declared return descriptor: the fulfilled value is not checked.
    let value = wrapped.call(&[json!(21)]).unwrap().resolved().await.unwrap();
    assert_eq!(value, json!("nope"));
}

#[tokio::test]
async fn test_call_resolved_awaits_either_arm() {
    let wrapped = TypeWrapper::shaped()
        .wrap(
            deferred_double_target(),
            Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
        )
        .unwrap();
    assert_eq!(wrapped.call_resolved(&[json!(5)]).await.unwrap(), json!(10));

    let ready = TypeWrapper::shaped()
        .wrap(
            shape_add_target(),
            Signature::shorthand([shapes::integer(), shapes::integer()]),
        )
        .unwrap();
    assert_eq!(
        ready.call_resolved(&[json!(4), json!(6)]).await.unwrap(),
        json!(10),
    );
}

#[tokio::test]
async fn test_shared_wrapped_targets_are_safe_across_tasks() {
    let wrapped = std::sync::Arc::new(
        TypeWrapper::shaped()
            .wrap(
                deferred_double_target(),
                Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
            )
            .unwrap(),
    );

    let mut handles = Vec::new();
    for base in 0..8i64 {
        let wrapped = std::sync::Arc::clone(&wrapped);
        handles.push(tokio::spawn(async move {
            wrapped.call_resolved(&[json!(base)]).await
        }));
    }

    for (base, handle) in handles.into_iter().enumerate() {
        let value = handle.await.unwrap().unwrap();
        assert_eq!(value, json!((base as i64) * 2));
    }
}

#[test]
fn test_outcome_debug_is_opaque_for_deferred_values() {
    let ready = Outcome::ready(json!(1));
    assert_eq!(format!("{ready:?}"), "Ready(Number(1))");

    let deferred = Outcome::deferred(async { Ok(json!(1)) });
    assert_eq!(format!("{deferred:?}"), "Deferred(..)");
}
