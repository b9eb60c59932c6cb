//! Targets and their invocation outcomes.
//!
//! A [`Target`] is the function being wrapped: a named callable over a
//! positional list of JSON values. Rust closures carry no reflected name, so
//! the name is supplied at construction and feeds every error-message prefix.
//!
//! Whether a result is immediate or deferred is an explicit tagged variant
//! ([`Outcome`]) decided by the target itself at the call site, never
//! re-detected structurally downstream.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::errors::WrapError;

/// A deferred result: settles to the produced value, or to the target's own
/// failure, which propagates through the wrapper untouched.
pub type DeferredValue = BoxFuture<'static, Result<Value, WrapError>>;

/// The result of invoking a target: available now, or later.
pub enum Outcome {
    /// The value is already available.
    Ready(Value),
    /// The value will be available once the future settles.
    Deferred(DeferredValue),
}

impl Outcome {
    /// An immediately available value.
    pub fn ready(value: impl Into<Value>) -> Self {
        Self::Ready(value.into())
    }

    /// A value that settles later.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value, WrapError>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    /// Whether the value is already available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Awaits either arm down to the settled value.
    pub async fn resolved(self) -> Result<Value, WrapError> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Deferred(future) => future.await,
        }
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Self::Ready(value)
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A named dynamic function over positional JSON arguments.
///
/// `R` is what one invocation produces: [`Value`] for synchronous targets
/// (the tag strategy), [`Outcome`] for targets that may defer (the shape
/// strategy).
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use typeweave::Target;
///
/// let add = Target::new("add", |args: &[Value]| {
///     json!(args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0))
/// });
/// assert_eq!(add.name(), "add");
/// assert_eq!(add.invoke(&[json!(2), json!(2)]), json!(4));
/// ```
pub struct Target<R> {
    name: String,
    call: Arc<dyn Fn(&[Value]) -> R + Send + Sync>,
}

impl<R> Target<R> {
    /// Wraps a callable under the given name.
    pub fn new(
        name: impl Into<String>,
        call: impl Fn(&[Value]) -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            call: Arc::new(call),
        }
    }

    /// The declared name, used to prefix every error message.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the underlying callable.
    pub fn invoke(&self, args: &[Value]) -> R {
        (self.call)(args)
    }
}

impl<R> Clone for Target<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            call: Arc::clone(&self.call),
        }
    }
}

impl<R> fmt::Debug for Target<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
