//! Shape descriptors and their factory surface.
//!
//! A descriptor is required by default; [`ShapeDescriptor::optional`]
//! produces the optional variant, which accepts an absent or null value
//! without a kind check. Descriptors are only buildable through the
//! factories here, so a malformed descriptor cannot reach the wrapping core.

/// What a descriptor expects of a present, non-null value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ShapeKind {
    Number,
    Integer,
    String,
    Boolean,
    Any,
    ArrayOf(Box<ShapeDescriptor>),
    ObjectOf(Vec<(String, ShapeDescriptor)>),
}

impl ShapeKind {
    /// The kind token used in oracle diagnostics.
    pub(crate) fn token(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::ArrayOf(_) => "array",
            Self::ObjectOf(_) => "shape",
        }
    }
}

/// A self-contained validator describing one expected value shape.
///
/// # Examples
///
/// ```
/// use typeweave::shapes;
///
/// let count = shapes::number();
/// assert!(!count.is_optional());
///
/// let label = shapes::string().optional();
/// assert!(label.is_optional());
///
/// let point = shapes::object_of([("x", shapes::number()), ("y", shapes::number())]);
/// let points = shapes::array_of(point);
/// assert_eq!(points.name(), "array");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    kind: ShapeKind,
    name: String,
    optional: bool,
}

impl ShapeDescriptor {
    fn new(kind: ShapeKind) -> Self {
        let name = kind.token().to_string();
        Self {
            kind,
            name,
            optional: false,
        }
    }

    /// The optional variant: absent and null values pass without a kind
    /// check.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Overrides the name used for this descriptor in diagnostics.
    ///
    /// Diagnostic tokens are matched against a lowercase charset; names
    /// outside it make the resulting diagnostic surface verbatim instead of
    /// normalized.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether absent and null values pass without a kind check.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The name used for this descriptor in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn kind(&self) -> &ShapeKind {
        &self.kind
    }
}

/// Expects any JSON number.
#[must_use]
pub fn number() -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::Number)
}

/// Expects a JSON integer (no fractional part).
#[must_use]
pub fn integer() -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::Integer)
}

/// Expects a JSON string.
#[must_use]
pub fn string() -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::String)
}

/// Expects a JSON boolean.
#[must_use]
pub fn boolean() -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::Boolean)
}

/// Expects any present value. Still rejects absent and null unless marked
/// optional.
#[must_use]
pub fn any() -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::Any)
}

/// Expects an array whose every element matches `element`.
#[must_use]
pub fn array_of(element: ShapeDescriptor) -> ShapeDescriptor {
    ShapeDescriptor::new(ShapeKind::ArrayOf(Box::new(element)))
}

/// Expects an object carrying the declared fields, each matching its
/// descriptor. Undeclared fields are ignored.
pub fn object_of<I, K>(fields: I) -> ShapeDescriptor
where
    I: IntoIterator<Item = (K, ShapeDescriptor)>,
    K: Into<String>,
{
    ShapeDescriptor::new(ShapeKind::ObjectOf(
        fields
            .into_iter()
            .map(|(key, descriptor)| (key.into(), descriptor))
            .collect(),
    ))
}
