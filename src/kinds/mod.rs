//! Tag-based validation (strategy A).
//!
//! Values are checked against named kinds from a fixed predicate
//! [`registry`] (`isNumber`, `isString`, the universal `isAny`, and so on),
//! either singly or as an `anyOf` union tried in declaration order. Unknown
//! tags are rejected at wrap time; mismatched values fail at call time with
//! the accepted kinds spelled out.
//!
//! # Examples
//!
//! ```
//! use serde_json::{Value, json};
//! use typeweave::{Signature, Target, TypeWrapper};
//! use typeweave::kinds::TagDef;
//!
//! # fn main() -> Result<(), typeweave::WrapError> {
//! let describe = Target::new("describe", |args: &[Value]| json!(args[0].to_string()));
//!
//! // Accept a number or a string, reject everything else.
//! let wrapped = TypeWrapper::tagged().wrap(
//!     describe,
//!     Signature::shorthand([TagDef::any_of(["isNumber", "isString"])]),
//! )?;
//!
//! assert!(wrapped.call(&[json!(7)]).is_ok());
//! assert!(wrapped.call(&[json!("seven")]).is_ok());
//! assert!(wrapped.call(&[json!({})]).is_err());
//! # Ok(())
//! # }
//! ```

mod definition;
pub mod registry;
mod strategy;

pub use definition::{KindMismatch, TagCheck, TagDef};
pub use strategy::{TagStrategy, TagWrapped};
