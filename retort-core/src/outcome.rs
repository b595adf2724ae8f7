//! Resolution outcomes.

use crate::rule::Rule;

/// The result of resolving one line of input against a registry.
///
/// Every variant is a recoverable value. The dispatcher never raises for bad
/// input; the caller renders the outcome and decides whether to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'r> {
    /// A single rule matched (exact-code and substring modes).
    Matched(&'r Rule),

    /// One or more rules fired, in registration order (keyword-set mode).
    ///
    /// The vector is never empty; zero matches is [`Outcome::Fallback`].
    Fired(Vec<&'r Rule>),

    /// Numeric input was expected and the text did not parse as one.
    InvalidInput,

    /// The number parsed but fell outside the valid menu range `[1, max]`.
    ///
    /// Covers zero and negative entries too: anything that parses as an
    /// integer is a range problem, not a parse problem.
    OutOfRange {
        /// The number the user entered.
        given: i64,
        /// The highest valid menu position.
        max: usize,
    },

    /// No rule matched. Also the degraded outcome when the external
    /// normalizer fails.
    Fallback,
}

impl<'r> Outcome<'r> {
    /// The matched rule, if exactly one matched.
    pub fn matched(&self) -> Option<&'r Rule> {
        match self {
            Outcome::Matched(rule) => Some(*rule),
            _ => None,
        }
    }

    /// The fired rules, if any fired.
    pub fn fired(&self) -> Option<&[&'r Rule]> {
        match self {
            Outcome::Fired(rules) => Some(rules.as_slice()),
            _ => None,
        }
    }

    /// Whether this outcome carries no rule at all.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Outcome::InvalidInput | Outcome::OutOfRange { .. } | Outcome::Fallback
        )
    }
}
