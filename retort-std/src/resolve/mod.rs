//! Resolution policies.
//!
//! Each policy is a pure function of its inputs: calling it twice with the
//! same input and registry yields the same
//! [`Outcome`](retort_core::Outcome). No policy mutates anything; side
//! effects are limited to a `tracing` event when the external normalizer
//! fails.
//!
//! | Policy | Input | Winner |
//! |---|---|---|
//! | [`resolve_code`] | numeric menu choice | the rule at that 1-based position |
//! | [`resolve_substring`] | free text | first registered substring match |
//! | [`resolve_keywords`] | free text | every intersecting keyword rule |

mod code;
mod keyword;
mod substring;

pub use code::resolve_code;
pub use keyword::resolve_keywords;
pub use substring::resolve_substring;
