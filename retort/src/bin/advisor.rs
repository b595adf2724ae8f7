//! Console entry point for the crypto advisor.
//!
//! An optional first argument names a JSON catalog file; without one the
//! builtin three-coin table is used.

use anyhow::{Context, Result};
use retort::repl::run_advisor;
use retort::{Advisor, Catalog, WhitespaceTokenizer};
use std::io;

fn main() -> Result<()> {
    init_tracing();

    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            let document = std::fs::read_to_string(&path)
                .with_context(|| format!("reading catalog file {path}"))?;
            Catalog::from_json(&document).with_context(|| format!("parsing catalog {path}"))?
        }
        None => Catalog::builtin(),
    };

    let advisor = Advisor::new(catalog)?;
    run_advisor(
        io::stdin().lock(),
        io::stdout(),
        &advisor,
        &WhitespaceTokenizer,
    )?;
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
