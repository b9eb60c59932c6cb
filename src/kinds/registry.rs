//! The predicate registry behind the tag strategy.
//!
//! An explicit, statically declared table mapping kind identifiers to
//! predicates over JSON values. The table is built once at first use and is
//! immutable afterwards; the rest of the crate consumes it only through the
//! query functions below.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde_json::Value;

/// A registered kind predicate.
pub type KindPredicate = fn(&Value) -> bool;

static REGISTRY: LazyLock<FxHashMap<&'static str, KindPredicate>> = LazyLock::new(|| {
    let mut kinds = FxHashMap::default();
    kinds.insert("isNumber", is_number as KindPredicate);
    kinds.insert("isInteger", is_integer as KindPredicate);
    kinds.insert("isString", is_string as KindPredicate);
    kinds.insert("isBoolean", is_boolean as KindPredicate);
    kinds.insert("isArray", is_array as KindPredicate);
    kinds.insert("isObject", is_object as KindPredicate);
    kinds.insert("isNull", is_null as KindPredicate);
    kinds.insert("isNil", is_null as KindPredicate);
    kinds.insert("isEmpty", is_empty as KindPredicate);
    // Universal kind: matches any value, including null.
    kinds.insert("isAny", is_any as KindPredicate);
    kinds
});

/// Looks up the predicate registered under `tag`.
#[must_use]
pub fn lookup(tag: &str) -> Option<KindPredicate> {
    REGISTRY.get(tag).copied()
}

/// Resolves `tag` to its registered spelling and predicate.
#[must_use]
pub fn resolve(tag: &str) -> Option<(&'static str, KindPredicate)> {
    REGISTRY
        .get_key_value(tag)
        .map(|(name, predicate)| (*name, *predicate))
}

/// Whether `tag` names a registered kind.
#[must_use]
pub fn is_registered(tag: &str) -> bool {
    REGISTRY.contains_key(tag)
}

/// Every registered kind identifier, sorted for stable output.
#[must_use]
pub fn registered_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = REGISTRY.keys().copied().collect();
    kinds.sort_unstable();
    kinds
}

fn is_number(value: &Value) -> bool {
    value.is_number()
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn is_string(value: &Value) -> bool {
    value.is_string()
}

fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

fn is_array(value: &Value) -> bool {
    value.is_array()
}

fn is_object(value: &Value) -> bool {
    value.is_object()
}

fn is_null(value: &Value) -> bool {
    value.is_null()
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn is_any(_value: &Value) -> bool {
    true
}
