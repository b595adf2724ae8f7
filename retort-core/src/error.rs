//! Error types for Retort.
//!
//! Unmatched or malformed *input* is never an error here: it resolves to one
//! of the recoverable [`Outcome`](crate::Outcome) variants. Errors are
//! reserved for construction-time misuse of the registry builder and for
//! collaborator failures surfaced as [`BoxError`].

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building a [`Registry`](crate::Registry).
///
/// All variants are programmer errors caught at startup; a successfully
/// built registry cannot fail at resolution time.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A substring pattern was empty after trimming.
    ///
    /// An empty needle is a substring of everything and would shadow every
    /// later rule.
    #[error("substring pattern is empty")]
    EmptySubstring,

    /// A keyword pattern carried no keywords.
    #[error("keyword pattern has no keywords")]
    EmptyKeywords,

    /// A keyword pattern contained an empty keyword.
    #[error("keyword pattern contains an empty keyword")]
    BlankKeyword,

    /// Two rules were registered for the same numeric code.
    #[error("duplicate rule for code {0}")]
    DuplicateCode(u32),
}
