//! First-match-wins substring resolution.

use retort_core::{Outcome, Registry};

/// Resolve free text against substring rules, first match wins.
///
/// The input is lowercased and trimmed, then each rule is tried in
/// registration order; the first rule whose substring pattern occurs in the
/// input is returned immediately and no further rules are checked. Rules
/// with non-substring patterns are skipped. No match yields
/// [`Outcome::Fallback`].
pub fn resolve_substring<'r>(input: &str, registry: &'r Registry) -> Outcome<'r> {
    let lowered = input.trim().to_lowercase();
    registry
        .iter()
        .find(|rule| rule.pattern.occurs_in(&lowered))
        .map_or(Outcome::Fallback, Outcome::Matched)
}

#[cfg(test)]
mod tests {
    use super::resolve_substring;
    use retort_core::{Outcome, Pattern, Registry, RegistryBuilder};

    fn rules() -> Registry {
        RegistryBuilder::new()
            .reply(Pattern::substring("hi"), "greeting")
            .reply(Pattern::substring("1"), "farmer")
            .reply(Pattern::substring("2"), "buyer")
            .build()
            .unwrap()
    }

    #[test]
    fn matches_anywhere_in_input() {
        let registry = rules();
        let outcome = resolve_substring("oh HI there", &registry);
        assert_eq!(outcome.matched().unwrap().reply_text(), Some("greeting"));
    }

    #[test]
    fn first_registered_match_wins() {
        let registry = rules();
        // Both "1" and "2" occur; "1" was registered first.
        let outcome = resolve_substring("21", &registry);
        assert_eq!(outcome.matched().unwrap().reply_text(), Some("farmer"));
    }

    #[test]
    fn no_match_is_fallback() {
        let registry = rules();
        assert_eq!(resolve_substring("good morning", &registry), Outcome::Fallback);
        assert_eq!(resolve_substring("", &registry), Outcome::Fallback);
    }
}
