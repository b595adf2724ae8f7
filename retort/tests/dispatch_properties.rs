//! Resolution-policy properties exercised through the facade.

use retort::{
    Outcome, Pattern, RegistryBuilder, WhitespaceTokenizer, presets, resolve_code,
    resolve_keywords, resolve_substring,
};

#[test]
fn exact_code_mode_is_deterministic_over_the_whole_range() {
    let courses = presets::builtin_courses();
    let registry = presets::course_menu(&courses).unwrap();

    for n in 1..=courses.len() {
        let input = n.to_string();
        let first = resolve_code(&input, &registry);
        let second = resolve_code(&input, &registry);
        assert_eq!(first, second);
        assert_eq!(
            first.matched().unwrap().reply_text(),
            Some(courses[n - 1].as_str())
        );
    }
}

#[test]
fn exact_code_mode_classifies_bad_input() {
    let registry = presets::course_menu(&presets::builtin_courses()).unwrap();

    assert_eq!(
        resolve_code("6", &registry),
        Outcome::OutOfRange { given: 6, max: 5 }
    );
    assert_eq!(
        resolve_code("0", &registry),
        Outcome::OutOfRange { given: 0, max: 5 }
    );
    // A parsed integer is always a range problem, even below zero.
    assert_eq!(
        resolve_code("-1", &registry),
        Outcome::OutOfRange { given: -1, max: 5 }
    );
    assert_eq!(resolve_code("six", &registry), Outcome::InvalidInput);
    assert_eq!(resolve_code("", &registry), Outcome::InvalidInput);
}

#[test]
fn substring_mode_prefers_the_earlier_registered_rule() {
    let registry = RegistryBuilder::new()
        .reply(Pattern::substring("green"), "first")
        .reply(Pattern::substring("tea"), "second")
        .build()
        .unwrap();

    // Both patterns occur in the input; registration order breaks the tie.
    let outcome = resolve_substring("green tea please", &registry);
    assert_eq!(outcome.matched().unwrap().reply_text(), Some("first"));
}

#[test]
fn keyword_mode_is_commutative_for_independent_intents() {
    let registry = presets::crypto_intents().unwrap();

    let a = resolve_keywords("trending and sustainable crypto", &registry, &WhitespaceTokenizer);
    let b = resolve_keywords("sustainable and trending crypto", &registry, &WhitespaceTokenizer);
    assert_eq!(a, b);

    let tags: Vec<_> = a
        .fired()
        .unwrap()
        .iter()
        .map(|rule| rule.tag().unwrap().0)
        .collect();
    assert_eq!(tags, ["sustainability", "trending"]);
}

#[test]
fn resolution_is_idempotent_across_modes() {
    let rules = presets::sms_rules().unwrap();
    assert_eq!(
        resolve_substring("hi there", &rules),
        resolve_substring("hi there", &rules)
    );

    let intents = presets::crypto_intents().unwrap();
    assert_eq!(
        resolve_keywords("what about profits", &intents, &WhitespaceTokenizer),
        resolve_keywords("what about profits", &intents, &WhitespaceTokenizer)
    );
}

#[test]
fn empty_input_resolves_to_a_fallback_outcome() {
    let rules = presets::sms_rules().unwrap();
    assert_eq!(resolve_substring("", &rules), Outcome::Fallback);

    let intents = presets::crypto_intents().unwrap();
    assert_eq!(
        resolve_keywords("", &intents, &WhitespaceTokenizer),
        Outcome::Fallback
    );
}
