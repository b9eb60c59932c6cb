//! The structural check entry point.
//!
//! [`check_value_type`] is the single query surface the shape strategy
//! consumes: given a present-or-absent value and a descriptor, it either
//! passes or reports a raw [`ShapeDiagnostic`]. The diagnostic text quotes
//! its tokens in backticks; the [`crate::diagnostics`] formatter rewrites
//! the recognized patterns into the messages callers actually see.

use std::fmt;

use serde_json::Value;

use crate::utils::json_ext::value_kind;

use super::descriptor::{ShapeDescriptor, ShapeKind};

/// A raw diagnostic from a failed structural check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeDiagnostic {
    message: String,
}

impl ShapeDiagnostic {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// The raw diagnostic text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the diagnostic, yielding the raw text.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ShapeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks a present-or-absent value against a descriptor.
///
/// Required descriptors reject an absent value as `undefined` and an
/// explicit null as `null`; optional descriptors accept both without a kind
/// check. Present non-null values are checked against the descriptor's
/// kind, recursing through array elements and declared object fields with
/// bracketed child names (`shape[count]`, `array[0]`).
///
/// # Errors
///
/// The raw diagnostic describing the first violation found.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeweave::shapes::{self, oracle};
///
/// let descriptor = shapes::number();
/// assert!(oracle::check_value_type(Some(&json!(4)), &descriptor).is_ok());
/// assert!(oracle::check_value_type(None, &descriptor).is_err());
/// assert!(oracle::check_value_type(None, &descriptor.clone().optional()).is_ok());
/// ```
pub fn check_value_type(
    value: Option<&Value>,
    descriptor: &ShapeDescriptor,
) -> Result<(), ShapeDiagnostic> {
    match value {
        None => {
            if descriptor.is_optional() {
                Ok(())
            } else {
                Err(required_violation(descriptor.name(), "undefined"))
            }
        }
        Some(Value::Null) => {
            if descriptor.is_optional() {
                Ok(())
            } else {
                Err(required_violation(descriptor.name(), "null"))
            }
        }
        Some(present) => check_kind(present, descriptor),
    }
}

fn check_kind(value: &Value, descriptor: &ShapeDescriptor) -> Result<(), ShapeDiagnostic> {
    let matches = match descriptor.kind() {
        ShapeKind::Number => value.is_number(),
        ShapeKind::Integer => value.is_i64() || value.is_u64(),
        ShapeKind::String => value.is_string(),
        ShapeKind::Boolean => value.is_boolean(),
        ShapeKind::Any => true,
        ShapeKind::ArrayOf(element) => {
            let Some(items) = value.as_array() else {
                return Err(invalid_param(
                    descriptor.name(),
                    value_kind(value),
                    descriptor.kind().token(),
                ));
            };
            for (index, item) in items.iter().enumerate() {
                let child = element
                    .as_ref()
                    .clone()
                    .named(format!("{}[{index}]", descriptor.name()));
                check_value_type(Some(item), &child)?;
            }
            true
        }
        ShapeKind::ObjectOf(fields) => {
            let Some(object) = value.as_object() else {
                return Err(invalid_param(
                    descriptor.name(),
                    value_kind(value),
                    descriptor.kind().token(),
                ));
            };
            for (key, field_descriptor) in fields {
                let child = field_descriptor
                    .clone()
                    .named(format!("{}[{key}]", descriptor.name()));
                check_value_type(object.get(key), &child)?;
            }
            true
        }
    };

    if matches {
        Ok(())
    } else {
        Err(invalid_param(
            descriptor.name(),
            value_kind(value),
            descriptor.kind().token(),
        ))
    }
}

fn required_violation(name: &str, received: &str) -> ShapeDiagnostic {
    ShapeDiagnostic::new(format!(
        "The param `{name}` is marked as required in `target`, but its value is `{received}`."
    ))
}

fn invalid_param(name: &str, received: &str, expected: &str) -> ShapeDiagnostic {
    ShapeDiagnostic::new(format!(
        "Invalid param `{name}` of type `{received}` supplied to `target`, expected `{expected}`."
    ))
}
