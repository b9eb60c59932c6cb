//! The strategy-agnostic wrapping core.
//!
//! [`TypeWrapper`] owns a [`WrapStrategy`] and turns a target plus a
//! [`Signature`] into the strategy's wrapped callable. The core never
//! inspects what a definition *means*; it only fixes the compilation
//! protocol: the resolver definition is parsed first at position `0`, the
//! positional definitions at their 1-based positions, and the results are
//! handed to the strategy's invocation builder.

use crate::errors::WrapError;

use super::signature::Signature;
use super::target::Target;

/// A pluggable validation strategy.
///
/// A strategy contributes two capabilities: compiling one definition into
/// its parsed form (rejecting malformed definitions at wrap time), and
/// building the wrapped callable from the target plus the compiled
/// definitions. Everything else (call shapes, position indexing, the
/// one-compilation-per-definition guarantee) lives in [`TypeWrapper`].
pub trait WrapStrategy {
    /// The definition type accepted at wrap time.
    type Definition;
    /// The compiled form of one definition, cached on the wrapped callable.
    type Parsed;
    /// What one invocation of a target produces.
    type Output;
    /// The wrapped callable built by [`build_invocator`](Self::build_invocator).
    type Wrapped;

    /// Compiles one definition.
    ///
    /// `position` is `0` for the resolver definition and the 1-based
    /// argument index otherwise; `target` is the wrapped function's name.
    /// Both exist purely so wrap-time errors can identify their site.
    fn parse_definition(
        &self,
        definition: Self::Definition,
        position: usize,
        target: &str,
    ) -> Result<Self::Parsed, WrapError>;

    /// Builds the wrapped callable from the compiled definitions.
    fn build_invocator(
        &self,
        target: Target<Self::Output>,
        params: Vec<Self::Parsed>,
        returns: Option<Self::Parsed>,
    ) -> Self::Wrapped;
}

/// Builds wrapped callables for one validation strategy.
///
/// Construct via [`TypeWrapper::tagged`], [`TypeWrapper::shaped`], or
/// [`TypeWrapper::new`] with a custom strategy.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use typeweave::{Signature, Target, TypeWrapper};
///
/// # fn main() -> Result<(), typeweave::WrapError> {
/// let add = Target::new("add", |args: &[Value]| {
///     json!(args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0))
/// });
///
/// let wrapped = TypeWrapper::tagged().wrap(add, Signature::shorthand(["isNumber", "isNumber"]))?;
/// assert_eq!(wrapped.call(&[json!(2), json!(2)])?, json!(4));
/// assert!(wrapped.call(&[json!(2), json!("2")]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeWrapper<S> {
    strategy: S,
}

impl<S: WrapStrategy> TypeWrapper<S> {
    /// Creates a wrapper around the given strategy.
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Compiles the signature and builds the wrapped callable.
    ///
    /// Every definition is compiled exactly once, here; invalid definitions
    /// fail the wrap and no callable is produced.
    ///
    /// # Errors
    ///
    /// Returns the strategy's wrap-time configuration error for the first
    /// definition it rejects, identifying the target name and the position
    /// (`0` for the resolver definition).
    pub fn wrap(
        &self,
        target: Target<S::Output>,
        signature: Signature<S::Definition>,
    ) -> Result<S::Wrapped, WrapError> {
        let (params, returns) = signature.into_parts();

        tracing::debug!(
            name = %target.name(),
            params = params.len(),
            has_resolver = returns.is_some(),
            "compiling wrapped target"
        );

        let returns = returns
            .map(|definition| self.strategy.parse_definition(definition, 0, target.name()))
            .transpose()?;

        let params = params
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                self.strategy
                    .parse_definition(definition, index + 1, target.name())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.strategy.build_invocator(target, params, returns))
    }
}
