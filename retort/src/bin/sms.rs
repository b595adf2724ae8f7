//! Console entry point for the agricultural SMS chatbot.

use anyhow::Result;
use retort::presets;
use retort::repl::run_rule_bot;
use std::io;

fn main() -> Result<()> {
    init_tracing();
    let rules = presets::sms_rules()?;
    run_rule_bot(io::stdin().lock(), io::stdout(), &rules)?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
