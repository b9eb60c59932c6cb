//! JSON value inspection helpers.
//!
//! Both validation strategies report mismatches in terms of the *kind* of
//! value they saw, not its contents. [`value_kind`] produces the canonical
//! kind name for a [`serde_json::Value`], and [`human_readable_list`] joins
//! a list of accepted kinds into the readable form used in error messages.

use serde_json::Value;

/// Canonical kind name for a JSON value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeweave::utils::json_ext::value_kind;
///
/// assert_eq!(value_kind(&json!(1.5)), "number");
/// assert_eq!(value_kind(&json!("hi")), "string");
/// assert_eq!(value_kind(&json!(null)), "null");
/// ```
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Joins items into a readable `a, b or c` form.
///
/// A single item is returned verbatim; two items are joined with `or` and no
/// comma. An empty list yields an empty string.
///
/// # Examples
///
/// ```
/// use typeweave::utils::json_ext::human_readable_list;
///
/// assert_eq!(human_readable_list(&["isNumber"]), "isNumber");
/// assert_eq!(human_readable_list(&["isNumber", "isString"]), "isNumber or isString");
/// assert_eq!(
///     human_readable_list(&["isNumber", "isString", "isBoolean"]),
///     "isNumber, isString or isBoolean",
/// );
/// ```
#[must_use]
pub fn human_readable_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
