//! Console loop drivers for the three bots.
//!
//! Each driver is generic over a `BufRead` input and a `Write` output: one
//! line in, one or more lines out, per turn. A loop ends only on an exit
//! keyword, end of input, or an I/O failure; bad input is answered with a
//! guidance line and the loop re-prompts.

mod advisor;
mod menu;
mod rule_bot;

pub use advisor::run_advisor;
pub use menu::run_menu;
pub use rule_bot::run_rule_bot;

use std::io::BufRead;
use thiserror::Error;

/// Errors surfaced by the REPL drivers.
///
/// Only transport failures land here; unmatched or malformed input is
/// handled inside the turn.
#[derive(Error, Debug)]
pub enum ReplError {
    /// Reading or writing the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A driver's registry failed to build.
    #[error("registry construction failed: {0}")]
    Registry(#[from] retort_core::RegistryError),
}

/// Exit keywords shared by every bot.
pub const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Whether the input is one of the given exit keywords, case-insensitively.
pub(crate) fn is_exit(input: &str, words: &[&str]) -> bool {
    let lowered = input.trim().to_lowercase();
    words.iter().any(|word| lowered == *word)
}

/// Read one line, without its terminator. `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ReplError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
