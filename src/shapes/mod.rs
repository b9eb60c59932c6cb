//! Descriptor-based validation (strategy B).
//!
//! Values are checked against structural [`ShapeDescriptor`]s: required by
//! default, optionally [`optional`](ShapeDescriptor::optional), nesting
//! through [`object_of`] fields and [`array_of`] elements. The
//! [`oracle`] performs the actual check and reports raw diagnostics, which
//! the [`crate::diagnostics`] formatter rewrites into the messages callers
//! see; unrecognized diagnostics surface verbatim.
//!
//! This is the deferred-aware strategy: a target may hand back its result
//! as [`Outcome::Deferred`](crate::Outcome::Deferred), and a declared
//! resolver descriptor is then applied once the future settles.
//!
//! # Examples
//!
//! ```
//! use serde_json::{Value, json};
//! use typeweave::{Outcome, Signature, Target, TypeWrapper, shapes};
//!
//! # fn main() -> Result<(), typeweave::WrapError> {
//! let add = Target::new("add", |args: &[Value]| {
//!     Outcome::ready(json!(args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0)))
//! });
//!
//! let wrapped = TypeWrapper::shaped().wrap(
//!     add,
//!     Signature::shorthand([shapes::number(), shapes::number()]).returning(shapes::number()),
//! )?;
//!
//! match wrapped.call(&[json!(2), json!(2)])? {
//!     Outcome::Ready(value) => assert_eq!(value, json!(4)),
//!     Outcome::Deferred(_) => unreachable!("target is synchronous"),
//! }
//! # Ok(())
//! # }
//! ```

mod descriptor;
pub mod oracle;
mod strategy;

pub use descriptor::{ShapeDescriptor, any, array_of, boolean, integer, number, object_of, string};
pub use strategy::{ShapeStrategy, ShapeWrapped};
