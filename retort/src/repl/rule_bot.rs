//! The agricultural SMS rule-lookup chatbot.

use super::{EXIT_WORDS, ReplError, is_exit, read_line};
use retort_core::{Outcome, Registry};
use retort_std::resolve::resolve_substring;
use std::io::{BufRead, Write};
use tracing::debug;

/// Answer printed when no rule matches.
const FALLBACK: &str = "I'm not sure how to respond to that. Try saying 'help'.";

/// Drive the substring rule chatbot until an exit keyword or end of input.
pub fn run_rule_bot<R, W>(mut input: R, mut out: W, rules: &Registry) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "You: ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        if is_exit(&line, &EXIT_WORDS) {
            writeln!(out, "Chatbot: Goodbye!")?;
            break;
        }

        let outcome = resolve_substring(&line, rules);
        debug!(input = %line, matched = !outcome.is_miss(), "rule bot turn");
        match outcome {
            Outcome::Matched(rule) => {
                writeln!(out, "Chatbot: {}", rule.reply_text().unwrap_or(FALLBACK))?
            }
            _ => writeln!(out, "Chatbot: {FALLBACK}")?,
        }
    }
    Ok(())
}
