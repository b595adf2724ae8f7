//! The crypto advisor console loop.

use super::{ReplError, is_exit, read_line};
use retort_core::Normalizer;
use retort_std::intents::Advisor;
use std::io::{BufRead, Write};
use tracing::debug;

/// The advisor also says goodbye to "bye".
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

const GREETING: [&str; 3] = [
    "👋 Hey there! I'm *CryptoBuddy* – your AI-powered financial sidekick!",
    "Ask me about trending, sustainable, or profitable cryptocurrencies! 💰🌱",
    "Type 'help' for available commands or 'exit' to quit.",
];

const HELP: [&str; 7] = [
    "Available commands:",
    "- Ask about sustainability",
    "- Ask about trending cryptocurrencies",
    "- Ask about long-term investments",
    "- Ask about profitable opportunities",
    "- Ask for information about specific cryptocurrencies",
    "- Type 'exit' to quit",
];

/// Drive the crypto advisor until an exit keyword or end of input.
///
/// Empty lines are skipped without a response; `help` is answered before
/// any intent resolution.
pub fn run_advisor<R, W, N>(
    mut input: R,
    mut out: W,
    advisor: &Advisor,
    normalizer: &N,
) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
    N: Normalizer,
{
    for line in GREETING {
        writeln!(out, "{line}")?;
    }

    loop {
        writeln!(out)?;
        write!(out, "You: ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let query = line.trim();

        if query.is_empty() {
            continue;
        }
        if is_exit(query, &EXIT_WORDS) {
            writeln!(out, "👋 Bye! Stay smart, stay sustainable. 🧠💸")?;
            break;
        }
        if query.eq_ignore_ascii_case("help") {
            for line in HELP {
                writeln!(out, "{line}")?;
            }
            continue;
        }

        let lines = advisor.advise(query, normalizer);
        debug!(query, responses = lines.len(), "advisor turn");
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
