//! Shared targets for the integration suites.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use typeweave::{Outcome, Target, WrapError};

/// Positional integer argument, defaulting to zero when absent or
/// non-numeric.
pub fn int_arg(args: &[Value], index: usize) -> i64 {
    args.get(index).and_then(Value::as_i64).unwrap_or(0)
}

/// A well-behaved synchronous adder.
pub fn add_target() -> Target<Value> {
    Target::new("add", |args: &[Value]| {
        json!(int_arg(args, 0) + int_arg(args, 1))
    })
}

/// An adder that returns a string no matter what.
pub fn broken_add_target() -> Target<Value> {
    Target::new("add", |_args: &[Value]| json!("string"))
}

/// An adder that counts how many times its body actually ran.
pub fn probe_add_target() -> (Target<Value>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let target = Target::new("add", move |args: &[Value]| {
        seen.fetch_add(1, Ordering::SeqCst);
        json!(int_arg(args, 0) + int_arg(args, 1))
    });
    (target, calls)
}

/// The adder as an outcome-producing target for the shape strategy.
pub fn shape_add_target() -> Target<Outcome> {
    Target::new("add", |args: &[Value]| {
        Outcome::ready(json!(int_arg(args, 0) + int_arg(args, 1)))
    })
}

/// Outcome-producing adder that returns a string no matter what.
pub fn shape_broken_target() -> Target<Outcome> {
    Target::new("add", |_args: &[Value]| Outcome::ready(json!("string")))
}

/// Outcome-producing adder with an invocation counter.
pub fn probe_shape_target() -> (Target<Outcome>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let target = Target::new("add", move |args: &[Value]| {
        seen.fetch_add(1, Ordering::SeqCst);
        Outcome::ready(json!(int_arg(args, 0) + int_arg(args, 1)))
    });
    (target, calls)
}

/// Doubles its argument behind a deferred outcome.
pub fn deferred_double_target() -> Target<Outcome> {
    Target::new("double", |args: &[Value]| {
        let base = int_arg(args, 0);
        Outcome::deferred(async move { Ok(json!(base * 2)) })
    })
}

/// Deferred target whose fulfilled value is never an integer.
pub fn deferred_broken_target() -> Target<Outcome> {
    Target::new("double", |_args: &[Value]| {
        Outcome::deferred(async { Ok(json!("nope")) })
    })
}

/// Deferred target that fails on its own before producing a value.
pub fn deferred_failing_target() -> Target<Outcome> {
    Target::new("double", |_args: &[Value]| {
        Outcome::deferred(async {
            Err(WrapError::TargetFailure {
                target: "double".to_string(),
                message: "upstream unavailable".to_string(),
            })
        })
    })
}

/// Deferred target with an invocation counter.
pub fn probe_deferred_target() -> (Target<Outcome>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let target = Target::new("double", move |args: &[Value]| {
        seen.fetch_add(1, Ordering::SeqCst);
        let base = int_arg(args, 0);
        Outcome::deferred(async move { Ok(json!(base * 2)) })
    });
    (target, calls)
}
