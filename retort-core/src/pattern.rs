//! Trigger patterns.

use std::collections::BTreeSet;

/// What triggers a rule.
///
/// The three variants correspond to the three matching policies the resolve
/// layer implements:
///
/// - [`Pattern::Code`]: exact numeric menu codes, dispatched positionally
///   (code `n` selects the `n`-th rule, 1-based).
/// - [`Pattern::Substring`]: case-insensitive literal substring of the
///   input; first registered match wins.
/// - [`Pattern::Keywords`]: fires when any keyword appears in the
///   normalized token set of the input; all matching rules fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// An exact numeric menu code.
    Code(u32),
    /// A case-insensitive literal substring. Stored lowercased.
    Substring(String),
    /// A set of keywords matched against normalized tokens.
    Keywords(Vec<String>),
}

impl Pattern {
    /// A substring pattern. The needle is lowercased on construction so
    /// matching only has to lowercase the input.
    pub fn substring(needle: impl Into<String>) -> Self {
        Pattern::Substring(needle.into().to_lowercase())
    }

    /// A keyword pattern. Keywords are lowercased on construction.
    pub fn keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pattern::Keywords(
            words
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        )
    }

    /// Whether this substring pattern occurs in the given lowercased text.
    ///
    /// Returns `false` for non-substring patterns.
    pub fn occurs_in(&self, lowered: &str) -> bool {
        match self {
            Pattern::Substring(needle) => lowered.contains(needle.as_str()),
            _ => false,
        }
    }

    /// Whether this keyword pattern intersects the given token set.
    ///
    /// Returns `false` for non-keyword patterns.
    pub fn intersects(&self, tokens: &BTreeSet<String>) -> bool {
        match self {
            Pattern::Keywords(words) => words.iter().any(|w| tokens.contains(w)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Pattern;
    use std::collections::BTreeSet;

    #[test]
    fn substring_is_lowercased_on_construction() {
        let p = Pattern::substring("Hi There");
        assert_eq!(p, Pattern::Substring("hi there".to_string()));
    }

    #[test]
    fn occurs_in_matches_anywhere() {
        let p = Pattern::substring("hi");
        assert!(p.occurs_in("hi there"));
        assert!(p.occurs_in("oh hi"));
        assert!(!p.occurs_in("hello"));
    }

    #[test]
    fn intersects_needs_one_shared_token() {
        let p = Pattern::keywords(["eco", "green"]);
        let tokens: BTreeSet<String> =
            ["something", "green"].into_iter().map(String::from).collect();
        assert!(p.intersects(&tokens));

        let empty = BTreeSet::new();
        assert!(!p.intersects(&empty));
    }

    #[test]
    fn mismatched_variants_never_match() {
        let code = Pattern::Code(1);
        assert!(!code.occurs_in("1"));
        assert!(!code.intersects(&BTreeSet::from(["1".to_string()])));
    }
}
