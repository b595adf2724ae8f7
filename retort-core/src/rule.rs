//! Rules: pattern-to-action pairings.

use crate::pattern::Pattern;

/// A name the caller interprets to run domain logic for a matched rule.
///
/// Tags are plain static names; the dispatcher never inspects them. The
/// crypto advisor, for example, maps the `"trending"` tag to its catalog
/// filter when the rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerTag(pub &'static str);

impl std::fmt::Display for HandlerTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// What happens when a rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A canned response returned verbatim.
    Reply(String),
    /// A handler tag the caller dispatches on.
    Invoke(HandlerTag),
}

/// A single dispatch rule: a trigger [`Pattern`] paired with an [`Action`].
///
/// Rules are inert data; matching policy and priority live in the registry
/// and the resolve layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The trigger.
    pub pattern: Pattern,
    /// The response or handler tag.
    pub action: Action,
    /// When true, this rule firing in keyword-set mode suppresses every
    /// other firing for that turn. Exact-code and substring modes ignore
    /// the flag (they already return a single winner).
    pub exclusive: bool,
}

impl Rule {
    /// A rule with a canned reply.
    pub fn reply(pattern: Pattern, text: impl Into<String>) -> Self {
        Self {
            pattern,
            action: Action::Reply(text.into()),
            exclusive: false,
        }
    }

    /// A rule that invokes a tagged handler.
    pub fn invoke(pattern: Pattern, tag: HandlerTag) -> Self {
        Self {
            pattern,
            action: Action::Invoke(tag),
            exclusive: false,
        }
    }

    /// Mark this rule exclusive for keyword-set resolution.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// The canned reply text, if this rule carries one.
    pub fn reply_text(&self) -> Option<&str> {
        match &self.action {
            Action::Reply(text) => Some(text),
            Action::Invoke(_) => None,
        }
    }

    /// The handler tag, if this rule carries one.
    pub fn tag(&self) -> Option<HandlerTag> {
        match self.action {
            Action::Invoke(tag) => Some(tag),
            Action::Reply(_) => None,
        }
    }
}
