//! # Typeweave: Runtime Argument & Return-Value Validation
//!
//! Typeweave takes a dynamically typed function (a named callable over a
//! positional list of [`serde_json::Value`]s) plus a declared signature,
//! and produces a wrapped callable that validates every argument (and
//! optionally the return value) against the declaration, failing with a
//! descriptive, positionally indexed error on the first mismatch.
//!
//! ## Core Concepts
//!
//! - **Targets**: named dynamic functions whose results are tagged
//!   immediate or deferred at the call site
//! - **Signatures**: explicit shorthand/longhand declarations of the
//!   expected parameter (and return) definitions
//! - **Strategies**: interchangeable validation backends sharing one
//!   wrapping core, tag-based kinds and structural shape descriptors
//! - **Diagnostics**: uniform human-readable messages synthesized from the
//!   backends' raw check failures
//!
//! ## Quick Start
//!
//! ### Tag-based checking
//!
//! Tags name predicates from a fixed registry (`isNumber`, `isString`,
//! `isAny`, …); unions accept the first matching kind:
//!
//! ```
//! use serde_json::{Value, json};
//! use typeweave::{Signature, Target, TypeWrapper};
//!
//! # fn main() -> Result<(), typeweave::WrapError> {
//! let add = Target::new("add", |args: &[Value]| {
//!     json!(args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0))
//! });
//!
//! let wrapped = TypeWrapper::tagged().wrap(
//!     add,
//!     Signature::shorthand(["isNumber", "isNumber"]).returning("isNumber"),
//! )?;
//!
//! assert_eq!(wrapped.call(&[json!(2), json!(2)])?, json!(4));
//!
//! let err = wrapped.call(&[json!(2), json!("2")]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "add (argument 2) expected a value of type matching \"isNumber\" but received \"string\"",
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Shape-based checking
//!
//! Shape descriptors are richer: required by default, optionally marked
//! [`optional`](shapes::ShapeDescriptor::optional), nesting through object
//! fields and array elements. The shape strategy is also deferred-aware, so
//! a target may hand its result back as a future, with a declared return
//! descriptor applied once it settles:
//!
//! ```
//! use serde_json::{Value, json};
//! use typeweave::{Outcome, Signature, Target, TypeWrapper, shapes};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), typeweave::WrapError> {
//! let fetch_total = Target::new("fetch_total", |args: &[Value]| {
//!     let base = args[0].as_i64().unwrap_or(0);
//!     Outcome::deferred(async move { Ok(json!(base * 2)) })
//! });
//!
//! let wrapped = TypeWrapper::shaped().wrap(
//!     fetch_total,
//!     Signature::shorthand([shapes::integer()]).returning(shapes::integer()),
//! )?;
//!
//! // Arguments are validated eagerly; only the return check suspends.
//! assert_eq!(wrapped.call_resolved(&[json!(21)]).await?, json!(42));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Messages
//!
//! Every failure is a single [`WrapError`] kind whose human-readable
//! message is the observable contract. Argument failures carry the target
//! name and the 1-based position; return failures carry the name only;
//! configuration mistakes (an unknown tag, an empty union) fail at wrap
//! time, before any callable exists. Raw oracle diagnostics the formatter
//! does not recognize are surfaced verbatim rather than masked.
//!
//! ## Module Guide
//!
//! - [`wrap`] - The strategy-agnostic core: signatures, targets, outcomes
//! - [`kinds`] - Tag-based validation against the predicate registry
//! - [`shapes`] - Structural descriptors, their factory surface, the oracle
//! - [`diagnostics`] - Normalization of raw oracle diagnostics
//! - [`errors`] - The [`WrapError`] taxonomy
//! - [`utils`] - JSON kind naming and list formatting helpers

pub mod diagnostics;
pub mod errors;
pub mod kinds;
pub mod shapes;
pub mod utils;
pub mod wrap;

pub use errors::WrapError;
pub use kinds::{TagDef, TagStrategy, TagWrapped};
pub use shapes::{ShapeDescriptor, ShapeStrategy, ShapeWrapped};
pub use wrap::{DeferredValue, Outcome, Signature, Target, TypeWrapper, WrapStrategy};

// The descriptor factory surface rides along at the crate root so callers
// can author shapes without a separate import.
pub use shapes::{any, array_of, boolean, integer, number, object_of, string};
