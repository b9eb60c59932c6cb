//! The tag strategy and its synchronous wrapped callable.

use serde_json::Value;

use crate::errors::WrapError;
use crate::wrap::{Target, TypeWrapper, WrapStrategy};

use super::definition::{TagCheck, TagCompileError, TagDef};

/// Tag-based validation against the kind registry.
///
/// Targets are synchronous by type: this strategy wraps
/// `Target<Value>` and never special-cases deferred results; a declared
/// resolver is checked immediately after invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagStrategy;

impl WrapStrategy for TagStrategy {
    type Definition = TagDef;
    type Parsed = TagCheck;
    type Output = Value;
    type Wrapped = TagWrapped;

    fn parse_definition(
        &self,
        definition: TagDef,
        position: usize,
        target: &str,
    ) -> Result<TagCheck, WrapError> {
        TagCheck::compile(&definition).map_err(|err| match err {
            TagCompileError::Unknown(tag) => WrapError::UnknownKind {
                target: target.to_string(),
                position,
                tag,
            },
            TagCompileError::Empty => WrapError::EmptyUnion {
                target: target.to_string(),
                position,
            },
        })
    }

    fn build_invocator(
        &self,
        target: Target<Value>,
        params: Vec<TagCheck>,
        returns: Option<TagCheck>,
    ) -> TagWrapped {
        TagWrapped {
            target,
            params,
            returns,
        }
    }
}

impl TypeWrapper<TagStrategy> {
    /// A wrapper bound to the tag strategy.
    #[must_use]
    pub fn tagged() -> Self {
        Self::new(TagStrategy)
    }
}

/// A target wrapped with tag checks.
///
/// Immutable after construction: each call only reads the captured checks
/// and operates on its own argument list, so the value is safe to share and
/// invoke concurrently.
#[derive(Clone, Debug)]
pub struct TagWrapped {
    target: Target<Value>,
    params: Vec<TagCheck>,
    returns: Option<TagCheck>,
}

impl TagWrapped {
    /// Validates each positional argument, invokes the target, and checks
    /// the result against the resolver definition if one was declared.
    ///
    /// Arguments beyond the declared definitions pass through unchecked;
    /// missing arguments are checked as JSON null.
    ///
    /// # Errors
    ///
    /// [`WrapError::ArgumentMismatch`] before the target runs,
    /// [`WrapError::ReturnMismatch`] after it returned a value of the wrong
    /// kind.
    pub fn call(&self, args: &[Value]) -> Result<Value, WrapError> {
        for (index, check) in self.params.iter().enumerate() {
            let value = args.get(index).unwrap_or(&Value::Null);
            if let Err(mismatch) = check.check(value) {
                return Err(WrapError::ArgumentMismatch {
                    target: self.target.name().to_string(),
                    position: index + 1,
                    expected: mismatch.expected,
                    received: mismatch.received,
                });
            }
        }

        let result = self.target.invoke(args);

        if let Some(returns) = &self.returns {
            if let Err(mismatch) = returns.check(&result) {
                return Err(WrapError::ReturnMismatch {
                    target: self.target.name().to_string(),
                    expected: mismatch.expected,
                    received: mismatch.received,
                });
            }
        }

        Ok(result)
    }

    /// The wrapped target's name.
    pub fn name(&self) -> &str {
        self.target.name()
    }

    /// Number of declared positional definitions.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
