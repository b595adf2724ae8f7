//! Standard normalizer implementations.

use retort_core::{BoxError, Normalizer};
use std::collections::BTreeSet;

/// A tokenizer that lowercases and splits on non-alphanumeric boundaries.
///
/// This is a deliberately naive stand-in for a real lemmatizer: it does no
/// stemming, so keyword sets must list the surface forms they expect
/// (`"trend"` does not match `"trending"`). Anything smarter belongs behind
/// the same [`Normalizer`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Normalizer for WhitespaceTokenizer {
    fn normalize(&self, text: &str) -> Result<BTreeSet<String>, BoxError> {
        Ok(text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect())
    }
}
