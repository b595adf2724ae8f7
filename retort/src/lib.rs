//! # retort - Rule-Based Canned-Response Dispatch
//!
//! `retort` turns the "dictionary of canned responses" chatbot pattern into
//! explicit, ordered, testable dispatch. A [`Registry`] of [`Rule`]s is
//! built once at startup; each turn, one of three resolution policies maps
//! a line of input to an [`Outcome`]; the caller renders the outcome and
//! mutates its own [`Session`] state.
//!
//! ## Quick Start
//!
//! ```rust
//! use retort::{presets, resolve_substring, Outcome};
//!
//! let rules = presets::sms_rules().unwrap();
//! match resolve_substring("hi there", &rules) {
//!     Outcome::Matched(rule) => println!("{}", rule.reply_text().unwrap()),
//!     _ => println!("no canned answer"),
//! }
//! ```
//!
//! The [`repl`] module drives the three original bots over any
//! `BufRead`/`Write` pair, so full conversations are testable without a
//! terminal.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use retort_core::{
    // Actions and rules
    Action,
    // Errors
    BoxError,
    HandlerTag,
    // The normalization seam
    Normalizer,
    // Resolution results
    Outcome,
    // Patterns
    Pattern,
    // Registries
    Registry,
    RegistryBuilder,
    RegistryError,
    Rule,
};

pub use retort_std::catalog::{Catalog, CatalogError, Coin, Level, Trend};
pub use retort_std::intents::Advisor;
pub use retort_std::normalizers::WhitespaceTokenizer;
pub use retort_std::resolve::{resolve_code, resolve_keywords, resolve_substring};
pub use retort_std::session::{LoginState, RegisterOutcome, Session};
pub use retort_std::{intents, presets, testing};

pub mod repl;
