//! Declared signatures for wrapped targets.
//!
//! The two call shapes are explicit constructors on [`Signature`], with no
//! sniffing of argument shapes, and are resolved before the shared wrapping
//! core ever sees them.

/// The declared parameter (and optional return) definitions for one wrap
/// request.
///
/// `D` is the strategy's definition type: a tag definition for the kind
/// strategy, a shape descriptor for the shape strategy.
///
/// # Examples
///
/// ```
/// use typeweave::Signature;
/// use typeweave::kinds::TagDef;
///
/// // Shorthand: parameter definitions only, no return check.
/// let sig: Signature<TagDef> = Signature::shorthand(["isNumber", "isNumber"]);
/// assert_eq!(sig.arity(), 2);
/// assert_eq!(sig.params(), [TagDef::from("isNumber"), TagDef::from("isNumber")]);
/// assert!(sig.resolver().is_none());
///
/// // Longhand: the fluent form declares a return definition as well.
/// let sig: Signature<TagDef> = Signature::shorthand(["isNumber"]).returning("isNumber");
/// assert!(sig.resolver().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Signature<D> {
    params: Vec<D>,
    returns: Option<D>,
}

impl<D> Signature<D> {
    /// Shorthand call shape: positional definitions, no declared return
    /// check.
    pub fn shorthand<I, T>(params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<D>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            returns: None,
        }
    }

    /// Longhand call shape: an explicit definition list plus an optional
    /// return-value definition.
    pub fn longhand<I, T>(params: I, returns: Option<D>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<D>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            returns,
        }
    }

    /// Declares the expected return definition, turning a shorthand
    /// signature into its longhand equivalent.
    #[must_use]
    pub fn returning(mut self, definition: impl Into<D>) -> Self {
        self.returns = Some(definition.into());
        self
    }

    /// The declared positional definitions, in order.
    pub fn params(&self) -> &[D] {
        &self.params
    }

    /// The declared return definition, if any.
    pub fn resolver(&self) -> Option<&D> {
        self.returns.as_ref()
    }

    /// Number of declared positional definitions.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<D>, Option<D>) {
        (self.params, self.returns)
    }
}
