//! Normalization of raw shape-oracle diagnostics.
//!
//! The shape oracle reports violations as prose with the interesting values
//! quoted in backticks (see [`crate::shapes::oracle`]). This module extracts
//! those tokens with a fixed pattern and rewrites the two recognized
//! diagnostic shapes into the uniform messages exposed to callers. Anything
//! the formatter does not recognize yields `None`, and the caller re-raises
//! the raw diagnostic verbatim; unknown failures are surfaced, not masked.

use std::sync::LazyLock;

use regex::Regex;


/// Backtick-quoted token pattern shared by every recognized diagnostic.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([a-z0-9\[\]]+)`").expect("token pattern is valid"));

/// Whether a value is being checked on the way in or on the way out.
///
/// The same oracle diagnostic normalizes to different prose depending on
/// which side of the invocation it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckMode {
    /// A positional argument, checked before the target runs.
    Input,
    /// A return value, checked after the target ran.
    Resolving,
}

/// Rewrites a raw oracle diagnostic into its normalized message.
///
/// Recognizes two diagnostic shapes:
///
/// - a *required* violation (`… is marked as required …`), where the third
///   backticked token is the stringification of the received value;
/// - an *invalid param* violation (`Invalid param …`), where tokens one, two
///   and four are the param name, the received kind and the expected kind.
///
/// Returns `None` for any other shape so the caller can propagate the
/// original diagnostic unmodified.
///
/// # Examples
///
/// ```
/// use typeweave::diagnostics::{CheckMode, normalize_diagnostic};
///
/// let raw = "The param `number` is marked as required in `target`, but its value is `undefined`.";
/// assert_eq!(
///     normalize_diagnostic(raw, CheckMode::Input).as_deref(),
///     Some("expected a required input value, but instead received \"undefined\""),
/// );
/// assert_eq!(normalize_diagnostic("disk on fire", CheckMode::Input), None);
/// ```
#[must_use]
pub fn normalize_diagnostic(raw: &str, mode: CheckMode) -> Option<String> {
    if raw.contains("is marked as required") {
        let tokens = extract_tokens(raw);
        let received = tokens.get(2)?;

        return Some(match mode {
            CheckMode::Input => {
                format!("expected a required input value, but instead received \"{received}\"")
            }
            CheckMode::Resolving => {
                format!("expected a return value, but instead returned \"{received}\"")
            }
        });
    }

    if raw.starts_with("Invalid param") {
        let tokens = extract_tokens(raw);
        let name = tokens.first()?;
        let received = tokens.get(1)?;
        let expected = tokens.get(3)?;

        return Some(match mode {
            CheckMode::Input => format!(
                "({name}) expected an input value of type \"{expected}\" but instead received \"{received}\""
            ),
            CheckMode::Resolving => format!(
                "({name}) expected a return value of type \"{expected}\" but instead returned \"{received}\""
            ),
        });
    }

    None
}

fn extract_tokens(raw: &str) -> Vec<&str> {
    TOKEN_PATTERN
        .captures_iter(raw)
        .filter_map(|capture| capture.get(1))
        .map(|token| token.as_str())
        .collect()
}
