//! The input normalization seam.

use crate::error::BoxError;
use std::collections::BTreeSet;

/// An external collaborator that maps raw text to a set of lowercase
/// base-form tokens.
///
/// Keyword-set resolution depends only on this trait, not on any particular
/// tokenizer or lemmatizer. Implementations may fail; the resolve layer
/// catches the error, logs it, and degrades to
/// [`Outcome::Fallback`](crate::Outcome::Fallback) so a broken normalizer
/// never ends a session.
pub trait Normalizer {
    /// Normalize raw input text into a token set.
    fn normalize(&self, text: &str) -> Result<BTreeSet<String>, BoxError>;
}

impl<N: Normalizer + ?Sized> Normalizer for &N {
    fn normalize(&self, text: &str) -> Result<BTreeSet<String>, BoxError> {
        (**self).normalize(text)
    }
}
