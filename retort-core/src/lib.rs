//! # retort-core
//!
//! Core types for the Retort rule-based dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! bot frontends and extensions that don't need the full `retort-std`
//! implementation.
//!
//! # Model
//!
//! Retort turns the "dictionary as dispatch table" pattern into explicit,
//! ordered data:
//!
//! - A [`Pattern`] describes what triggers a rule: an exact numeric menu
//!   code, a case-insensitive substring, or a set of keywords matched
//!   against normalized tokens.
//! - A [`Rule`] pairs a pattern with an [`Action`]: either a canned reply
//!   or a [`HandlerTag`] the caller interprets.
//! - A [`Registry`] is an ordered, immutable sequence of rules. Insertion
//!   order is the tie-break priority: where a single winner is required,
//!   the earliest-registered matching rule wins.
//! - An [`Outcome`] is the result of resolving one line of input against a
//!   registry. Bad input is an ordinary outcome ([`Outcome::InvalidInput`],
//!   [`Outcome::OutOfRange`], [`Outcome::Fallback`]), never an `Err`; the
//!   caller decides how to re-prompt.
//!
//! Input normalization (tokenization, lemmatization) is an external
//! collaborator behind the [`Normalizer`] trait. The core has no opinion on
//! its internals; a failing normalizer degrades to [`Outcome::Fallback`] in
//! the resolution layer.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod normalize;
mod outcome;
mod pattern;
mod registry;
mod rule;

pub use error::{BoxError, RegistryError};
pub use normalize::Normalizer;
pub use outcome::Outcome;
pub use pattern::Pattern;
pub use registry::{Registry, RegistryBuilder};
pub use rule::{Action, HandlerTag, Rule};
