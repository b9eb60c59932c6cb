//! The shape strategy and its deferred-aware wrapped callable.

use serde_json::Value;

use crate::diagnostics::{CheckMode, normalize_diagnostic};
use crate::errors::WrapError;
use crate::wrap::{Outcome, Target, TypeWrapper, WrapStrategy};

use super::descriptor::ShapeDescriptor;
use super::oracle::{self, ShapeDiagnostic};

/// Descriptor-based validation via the structural oracle.
///
/// Targets produce an [`Outcome`], so a declared resolver validates
/// immediate results synchronously and deferred results once they settle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeStrategy;

impl WrapStrategy for ShapeStrategy {
    type Definition = ShapeDescriptor;
    type Parsed = ShapeDescriptor;
    type Output = Outcome;
    type Wrapped = ShapeWrapped;

    // Descriptors self-check at call time; the factory surface makes a
    // malformed one unrepresentable, so compilation is a pass-through.
    fn parse_definition(
        &self,
        definition: ShapeDescriptor,
        _position: usize,
        _target: &str,
    ) -> Result<ShapeDescriptor, WrapError> {
        Ok(definition)
    }

    fn build_invocator(
        &self,
        target: Target<Outcome>,
        params: Vec<ShapeDescriptor>,
        returns: Option<ShapeDescriptor>,
    ) -> ShapeWrapped {
        ShapeWrapped {
            target,
            params,
            returns,
        }
    }
}

impl TypeWrapper<ShapeStrategy> {
    /// A wrapper bound to the shape strategy.
    #[must_use]
    pub fn shaped() -> Self {
        Self::new(ShapeStrategy)
    }
}

/// A target wrapped with shape descriptors.
///
/// Immutable after construction and safe to invoke concurrently; a deferred
/// resolver check captures its own clone of the return descriptor.
#[derive(Clone, Debug)]
pub struct ShapeWrapped {
    target: Target<Outcome>,
    params: Vec<ShapeDescriptor>,
    returns: Option<ShapeDescriptor>,
}

impl ShapeWrapped {
    /// Validates each positional argument, invokes the target, and arranges
    /// the resolver check for whichever arm the outcome took.
    ///
    /// Each argument is fetched present-or-absent (`args.get(index)`), so a
    /// missing argument and nothing-at-that-position are indistinguishable
    /// to the oracle. Argument checks always run eagerly, before the target;
    /// a deferred outcome only suspends the resolver check.
    ///
    /// A deferred target that fails on its own propagates that failure
    /// untouched; the resolver definition is applied only to a fulfilled
    /// value.
    ///
    /// # Errors
    ///
    /// [`WrapError::ArgumentShape`] before the target runs,
    /// [`WrapError::ReturnShape`] for a mismatched result, or
    /// [`WrapError::Oracle`] when the oracle's diagnostic is not one the
    /// formatter recognizes.
    pub fn call(&self, args: &[Value]) -> Result<Outcome, WrapError> {
        for (index, descriptor) in self.params.iter().enumerate() {
            if let Err(diagnostic) = oracle::check_value_type(args.get(index), descriptor) {
                return Err(argument_error(self.target.name(), index + 1, diagnostic));
            }
        }

        let outcome = self.target.invoke(args);

        let Some(returns) = &self.returns else {
            return Ok(outcome);
        };

        match outcome {
            Outcome::Ready(value) => match oracle::check_value_type(Some(&value), returns) {
                Ok(()) => Ok(Outcome::Ready(value)),
                Err(diagnostic) => Err(return_error(self.target.name(), diagnostic)),
            },
            Outcome::Deferred(future) => {
                let returns = returns.clone();
                let name = self.target.name().to_string();
                Ok(Outcome::deferred(async move {
                    let value = future.await?;
                    match oracle::check_value_type(Some(&value), &returns) {
                        Ok(()) => Ok(value),
                        Err(diagnostic) => Err(return_error(&name, diagnostic)),
                    }
                }))
            }
        }
    }

    /// Convenience over [`call`](Self::call) that awaits either outcome arm
    /// down to the settled value.
    pub async fn call_resolved(&self, args: &[Value]) -> Result<Value, WrapError> {
        self.call(args)?.resolved().await
    }

    /// The wrapped target's name.
    pub fn name(&self) -> &str {
        self.target.name()
    }

    /// Number of declared positional descriptors.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

fn argument_error(target: &str, position: usize, diagnostic: ShapeDiagnostic) -> WrapError {
    match normalize_diagnostic(diagnostic.message(), CheckMode::Input) {
        Some(message) => WrapError::ArgumentShape {
            target: target.to_string(),
            position,
            message,
        },
        None => {
            tracing::warn!(raw = %diagnostic, "unrecognized oracle diagnostic, surfacing verbatim");
            WrapError::Oracle {
                raw: diagnostic.into_message(),
            }
        }
    }
}

fn return_error(target: &str, diagnostic: ShapeDiagnostic) -> WrapError {
    match normalize_diagnostic(diagnostic.message(), CheckMode::Resolving) {
        Some(message) => WrapError::ReturnShape {
            target: target.to_string(),
            message,
        },
        None => {
            tracing::warn!(raw = %diagnostic, "unrecognized oracle diagnostic, surfacing verbatim");
            WrapError::Oracle {
                raw: diagnostic.into_message(),
            }
        }
    }
}
