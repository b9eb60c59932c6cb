//! The single error kind raised by wrapped functions.
//!
//! Every failure in this crate (wrap-time configuration mistakes, call-time
//! argument mismatches, return-value mismatches, and pass-throughs of
//! unrecognized oracle diagnostics) is a [`WrapError`]. There is no
//! structured error code on the value itself beyond the miette diagnostic
//! metadata; the human-readable message is the observable contract and
//! callers are expected to match on it.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while wrapping a target or invoking a wrapped target.
///
/// Configuration variants ([`UnknownKind`](Self::UnknownKind),
/// [`EmptyUnion`](Self::EmptyUnion)) are only raised at wrap time, never
/// during a call. Argument variants are raised before the target executes;
/// return variants after it executed (synchronously or once a deferred
/// outcome settles).
#[derive(Debug, Error, Diagnostic)]
pub enum WrapError {
    /// A tag definition named a kind that is not in the registry.
    #[error("{target} (argument {position}) type {tag} is not recognized in definitions")]
    #[diagnostic(
        code(typeweave::kinds::unknown_kind),
        help("Use a registered kind identifier such as isNumber, isString or isAny.")
    )]
    UnknownKind {
        target: String,
        position: usize,
        tag: String,
    },

    /// An `anyOf` union declared no kinds at all.
    #[error("{target} (argument {position}) union definition must declare at least one kind")]
    #[diagnostic(code(typeweave::kinds::empty_union))]
    EmptyUnion { target: String, position: usize },

    /// A positional argument failed its tag check.
    #[error(
        "{target} (argument {position}) expected a value of type matching \"{expected}\" but received \"{received}\""
    )]
    #[diagnostic(code(typeweave::kinds::argument_mismatch))]
    ArgumentMismatch {
        target: String,
        position: usize,
        expected: String,
        received: &'static str,
    },

    /// A return value failed its tag check.
    #[error(
        "{target} expected to return value of type matching \"{expected}\" but received \"{received}\""
    )]
    #[diagnostic(code(typeweave::kinds::return_mismatch))]
    ReturnMismatch {
        target: String,
        expected: String,
        received: &'static str,
    },

    /// A positional argument failed its shape check; `message` is the
    /// normalized form of the oracle's raw diagnostic.
    #[error("{target} (argument {position}) {message}")]
    #[diagnostic(code(typeweave::shapes::argument_shape))]
    ArgumentShape {
        target: String,
        position: usize,
        message: String,
    },

    /// A return value failed its shape check. Carries no argument position.
    #[error("{target} {message}")]
    #[diagnostic(code(typeweave::shapes::return_shape))]
    ReturnShape { target: String, message: String },

    /// The shape oracle produced a diagnostic the formatter does not
    /// recognize. The raw text is surfaced verbatim rather than masked.
    #[error("{raw}")]
    #[diagnostic(code(typeweave::shapes::oracle))]
    Oracle { raw: String },

    /// A deferred target failed on its own before the return check could
    /// run. The resolver definition is never applied to this path.
    #[error("{target} failed: {message}")]
    #[diagnostic(code(typeweave::target_failure))]
    TargetFailure { target: String, message: String },
}
