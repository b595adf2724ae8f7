//! # retort-std
//!
//! Standard implementations for the Retort rule-based dispatch framework.
//!
//! This crate provides:
//! - **Resolution policies**: exact-code, substring, and keyword-set
//!   matching over a [`Registry`](retort_core::Registry)
//! - **Catalog**: the static cryptocurrency reference table and its filter
//!   and reduction queries
//! - **Intent engine**: the crypto advisor's turn logic over catalog queries
//! - **Session**: the menu simulator's login state machine and
//!   registered-course set
//! - **Normalizers**: a whitespace tokenizer standing in for a real
//!   lemmatizer
//! - **Presets**: prebuilt registries for the three original bots
//! - **Testing**: scripted normalizer doubles

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use retort_core;

// Modules
pub mod catalog;
pub mod intents;
pub mod normalizers;
pub mod presets;
pub mod resolve;
pub mod session;
pub mod testing;
