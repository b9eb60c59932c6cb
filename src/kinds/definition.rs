//! Tag definitions and their compiled form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::json_ext::{human_readable_list, value_kind};

use super::registry::{self, KindPredicate};

/// A tag-based type definition: one registered kind, or a union of kinds.
///
/// Serializes to the wire forms `"isNumber"` and
/// `{"anyOf": ["isNumber", "isString"]}`.
///
/// # Examples
///
/// ```
/// use typeweave::kinds::TagDef;
///
/// let single = TagDef::from("isNumber");
/// let union = TagDef::from(["isNumber", "isString"]);
/// assert_eq!(single.tags(), ["isNumber"]);
/// assert_eq!(union.tags(), ["isNumber", "isString"]);
///
/// let wire: TagDef = serde_json::from_str(r#"{"anyOf": ["isNumber"]}"#).unwrap();
/// assert_eq!(wire, TagDef::any_of(["isNumber"]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagDef {
    /// A single kind identifier.
    One(String),
    /// A union accepting the first matching kind, tried in declaration
    /// order.
    AnyOf {
        #[serde(rename = "anyOf")]
        any_of: Vec<String>,
    },
}

impl TagDef {
    /// A single-kind definition.
    pub fn one(tag: impl Into<String>) -> Self {
        Self::One(tag.into())
    }

    /// A union definition over the given kinds.
    pub fn any_of<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::AnyOf {
            any_of: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The declared kind identifiers, in declaration order.
    pub fn tags(&self) -> &[String] {
        match self {
            Self::One(tag) => std::slice::from_ref(tag),
            Self::AnyOf { any_of } => any_of,
        }
    }
}

impl From<&str> for TagDef {
    fn from(tag: &str) -> Self {
        Self::One(tag.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for TagDef {
    fn from(tags: [&str; N]) -> Self {
        Self::any_of(tags)
    }
}

/// Why a tag definition failed to compile.
#[derive(Debug)]
pub(crate) enum TagCompileError {
    /// The named tag is not in the registry.
    Unknown(String),
    /// The union declared no kinds.
    Empty,
}

/// How a value failed a compiled tag check.
#[derive(Clone, Debug)]
pub struct KindMismatch {
    /// Accepted kinds in human-readable form.
    pub expected: String,
    /// Canonical kind name of the received value.
    pub received: &'static str,
}

/// The compiled form of a [`TagDef`]: the resolved predicates, checked in
/// declaration order with the first match winning.
///
/// Compiled once at wrap time and cached on the wrapped callable.
#[derive(Clone, Debug)]
pub struct TagCheck {
    tags: Vec<(&'static str, KindPredicate)>,
}

impl TagCheck {
    /// Resolves every declared tag against the registry.
    pub(crate) fn compile(definition: &TagDef) -> Result<Self, TagCompileError> {
        let declared = definition.tags();
        if declared.is_empty() {
            return Err(TagCompileError::Empty);
        }

        let mut tags = Vec::with_capacity(declared.len());
        for tag in declared {
            match registry::resolve(tag) {
                Some(resolved) => tags.push(resolved),
                None => return Err(TagCompileError::Unknown(tag.clone())),
            }
        }
        Ok(Self { tags })
    }

    /// Non-fatal check: whether the value matches any accepted kind.
    #[must_use]
    pub fn is_match(&self, value: &Value) -> bool {
        self.tags.iter().any(|(_, predicate)| predicate(value))
    }

    /// Fatal check: `Ok` on the first matching kind, otherwise the mismatch
    /// listing the accepted kinds.
    pub fn check(&self, value: &Value) -> Result<(), KindMismatch> {
        if self.is_match(value) {
            return Ok(());
        }
        Err(KindMismatch {
            expected: self.expected(),
            received: value_kind(value),
        })
    }

    /// Accepted kinds in human-readable form (`isNumber, isString or
    /// isBoolean`).
    #[must_use]
    pub fn expected(&self) -> String {
        let names: Vec<&str> = self.tags.iter().map(|(name, _)| *name).collect();
        human_readable_list(&names)
    }
}
