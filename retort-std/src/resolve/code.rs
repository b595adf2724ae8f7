//! Exact-code resolution for numeric menus.

use retort_core::{Outcome, Registry};

/// Resolve a numeric menu choice against the registry.
///
/// The input is trimmed and parsed as a signed integer. Only unparseable
/// text yields [`Outcome::InvalidInput`]; any parsed integer outside
/// `[1, registry.len()]` (zero and negatives included) yields
/// [`Outcome::OutOfRange`]; otherwise the rule at that 1-based position is
/// [`Outcome::Matched`].
pub fn resolve_code<'r>(input: &str, registry: &'r Registry) -> Outcome<'r> {
    let Ok(choice) = input.trim().parse::<i64>() else {
        return Outcome::InvalidInput;
    };
    let position = u32::try_from(choice).ok();
    match position.and_then(|p| registry.at_position(p)) {
        Some(rule) => Outcome::Matched(rule),
        None => Outcome::OutOfRange {
            given: choice,
            max: registry.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_code;
    use retort_core::{Outcome, Pattern, Registry, RegistryBuilder};

    fn menu() -> Registry {
        RegistryBuilder::new()
            .reply(Pattern::Code(1), "Mathematics")
            .reply(Pattern::Code(2), "Physics")
            .build()
            .unwrap()
    }

    #[test]
    fn valid_choice_selects_by_position() {
        let registry = menu();
        for _ in 0..2 {
            // Deterministic on repeated calls.
            let outcome = resolve_code("1", &registry);
            assert_eq!(outcome.matched().unwrap().reply_text(), Some("Mathematics"));
        }
        let outcome = resolve_code(" 2 ", &registry);
        assert_eq!(outcome.matched().unwrap().reply_text(), Some("Physics"));
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let registry = menu();
        assert_eq!(
            resolve_code("3", &registry),
            Outcome::OutOfRange { given: 3, max: 2 }
        );
        assert_eq!(
            resolve_code("0", &registry),
            Outcome::OutOfRange { given: 0, max: 2 }
        );
    }

    #[test]
    fn negative_and_overlarge_integers_are_out_of_range() {
        let registry = menu();
        assert_eq!(
            resolve_code("-1", &registry),
            Outcome::OutOfRange { given: -1, max: 2 }
        );
        assert_eq!(
            resolve_code("5000000000", &registry),
            Outcome::OutOfRange {
                given: 5_000_000_000,
                max: 2
            }
        );
    }

    #[test]
    fn non_numeric_is_invalid_input() {
        let registry = menu();
        assert_eq!(resolve_code("two", &registry), Outcome::InvalidInput);
        assert_eq!(resolve_code("", &registry), Outcome::InvalidInput);
        assert_eq!(resolve_code("1.5", &registry), Outcome::InvalidInput);
    }
}
