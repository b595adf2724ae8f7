//! Prebuilt registries for the three original bots.

use crate::intents;
use retort_core::{Pattern, Registry, RegistryBuilder, RegistryError, Rule};

/// The agricultural SMS chatbot's substring rules, in lookup order.
///
/// "hi" is registered first so a greeting wins over any digit that happens
/// to appear in the same message.
pub fn sms_rules() -> Result<Registry, RegistryError> {
    RegistryBuilder::new()
        .reply(
            Pattern::substring("hi"),
            "Hello! how can I assist you today? \n 1. Farmer \n 2. Buyer \n 3. Expert \n 4. Exit",
        )
        .reply(Pattern::substring("1"), "Welcome to the Farmer section.")
        .reply(Pattern::substring("2"), "Welcome to the Buyer section.")
        .reply(Pattern::substring("3"), "Welcome to the Expert section.")
        .reply(Pattern::substring("4"), "Thank you for using SMSA Chatbot.")
        .build()
}

/// The crypto advisor's intent rules.
///
/// `info` is exclusive: when it fires it suppresses every other intent for
/// the turn. The remaining intents render in registration order, so that
/// order is part of the advisor's observable behavior.
pub fn crypto_intents() -> Result<Registry, RegistryError> {
    RegistryBuilder::new()
        .rule(
            Rule::invoke(
                Pattern::keywords(["what", "tell", "about", "information", "details"]),
                intents::INFO,
            )
            .exclusive(),
        )
        .invoke(
            Pattern::keywords(["eco", "green", "sustainable", "environment", "low", "energy"]),
            intents::SUSTAINABILITY,
        )
        .invoke(
            Pattern::keywords(["trend", "rising", "up", "increase"]),
            intents::TRENDING,
        )
        .invoke(
            Pattern::keywords(["long", "future", "growth", "hold", "potential"]),
            intents::LONG_TERM,
        )
        .invoke(
            Pattern::keywords(["profit", "invest", "buy", "high", "market", "return"]),
            intents::PROFITABILITY,
        )
        .build()
}

/// An exact-code menu over a course list: choice `n` replies with the
/// `n`-th course name, 1-based.
pub fn course_menu<S: AsRef<str>>(courses: &[S]) -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    for (index, course) in courses.iter().enumerate() {
        builder = builder.reply(Pattern::Code(index as u32 + 1), course.as_ref());
    }
    builder.build()
}

/// The course list the original menu simulator shipped with.
pub fn builtin_courses() -> Vec<String> {
    ["Mathematics", "Physics", "Computer Science", "Cybersecurity", "IoT"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{builtin_courses, course_menu, crypto_intents, sms_rules};
    use crate::resolve::resolve_code;

    #[test]
    fn presets_build_cleanly() {
        assert_eq!(sms_rules().unwrap().len(), 5);
        assert_eq!(crypto_intents().unwrap().len(), 5);
    }

    #[test]
    fn course_menu_maps_choices_to_names() {
        let registry = course_menu(&builtin_courses()).unwrap();
        let outcome = resolve_code("5", &registry);
        assert_eq!(outcome.matched().unwrap().reply_text(), Some("IoT"));
    }
}
