// crates/estate-suggest-core/src/text.rs

//! Query and label normalization.
//!
//! Suggestion matching is a case-insensitive substring test. By default only
//! case is normalized ([`MatchMode::Lowercase`]); [`MatchMode::Folded`] also
//! transliterates Unicode to ASCII using the `deunicode` crate, so a query for
//! `"cote"` finds `"Côte"`.

use serde::{Deserialize, Serialize};

/// Normalization applied to both sides of a substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Unicode lower-casing only.
    #[default]
    Lowercase,
    /// Transliterate to ASCII, then lower-case.
    Folded,
}

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use estate_suggest_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Normalizes `s` according to `mode`.
#[inline]
pub fn normalize(s: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Lowercase => s.to_lowercase(),
        MatchMode::Folded => fold_key(s),
    }
}

/// Lower-cases (or folds) and trims a raw user query.
#[inline]
pub fn normalize_query(query: &str, mode: MatchMode) -> String {
    normalize(query.trim(), mode)
}

/// Returns `true` if `haystack` contains `needle` after normalizing the
/// haystack. `needle` must already be normalized with the same `mode`.
#[inline]
pub fn contains_normalized(haystack: &str, needle: &str, mode: MatchMode) -> bool {
    normalize(haystack, mode).contains(needle)
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on the normalized form
/// - [`NameMatch::name_contains`] — substring match on the normalized form
///
/// # Examples
/// ```rust
/// use estate_suggest_core::text::{MatchMode, NameMatch};
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("DKI Jakarta").name_contains("jakarta", MatchMode::Lowercase));
/// assert!(Place("Zürich").name_contains("zuri", MatchMode::Folded));
/// assert!(!Place("Zürich").name_contains("zuri", MatchMode::Lowercase));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Equality after normalization of both sides.
    #[inline]
    fn is_named(&self, q: &str, mode: MatchMode) -> bool {
        normalize(self.name_str(), mode) == normalize(q, mode)
    }

    /// Substring match. `q` must already be normalized with `mode`.
    #[inline]
    fn name_contains(&self, q: &str, mode: MatchMode) -> bool {
        contains_normalized(self.name_str(), q, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_mode_keeps_diacritics() {
        assert_eq!(normalize("Côte", MatchMode::Lowercase), "côte");
        assert_eq!(normalize("Côte", MatchMode::Folded), "cote");
    }

    #[test]
    fn query_is_trimmed_and_lowered() {
        assert_eq!(
            normalize_query("  Jakarta ", MatchMode::Lowercase),
            "jakarta"
        );
    }

    #[test]
    fn contains_uses_haystack_normalization() {
        assert!(contains_normalized("Test Recent", "test", MatchMode::Lowercase));
        assert!(!contains_normalized("Recent Search 1", "test", MatchMode::Lowercase));
        assert!(contains_normalized("Bogor Tengah", "", MatchMode::Lowercase));
    }

    #[test]
    fn is_named_ignores_case() {
        struct P(&'static str);
        impl NameMatch for P {
            fn name_str(&self) -> &str {
                self.0
            }
        }
        assert!(P("Bandung").is_named("BANDUNG", MatchMode::Lowercase));
        assert!(!P("Bandung").is_named("Bandu", MatchMode::Lowercase));
    }
}
