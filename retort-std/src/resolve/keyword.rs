//! Collect-all keyword-set resolution.

use retort_core::{Normalizer, Outcome, Registry};
use tracing::warn;

/// Resolve free text against keyword rules; all intersecting rules fire.
///
/// The input is normalized into a token set by the external collaborator.
/// Every keyword rule whose set intersects the tokens fires, collected in
/// registration order. A query may legitimately hit several rules at once,
/// which is why this mode collects instead of stopping at the first match.
///
/// Two exceptions to collect-all:
/// - an [`exclusive`](retort_core::Rule::exclusive) rule that fires is
///   returned alone and suppresses every other firing for the turn (the
///   first-registered exclusive rule wins if several fire);
/// - zero firings yield [`Outcome::Fallback`].
///
/// A normalizer failure is caught and logged, and the turn degrades to
/// [`Outcome::Fallback`]; it never propagates.
pub fn resolve_keywords<'r, N: Normalizer>(
    input: &str,
    registry: &'r Registry,
    normalizer: &N,
) -> Outcome<'r> {
    let tokens = match normalizer.normalize(input) {
        Ok(tokens) => tokens,
        Err(error) => {
            warn!(%error, "normalizer failed, degrading to fallback");
            return Outcome::Fallback;
        }
    };

    let fired: Vec<_> = registry
        .iter()
        .filter(|rule| rule.pattern.intersects(&tokens))
        .collect();

    if let Some(rule) = fired.iter().find(|rule| rule.exclusive).copied() {
        return Outcome::Fired(vec![rule]);
    }
    if fired.is_empty() {
        return Outcome::Fallback;
    }
    Outcome::Fired(fired)
}
