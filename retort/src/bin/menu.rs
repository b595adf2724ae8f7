//! Console entry point for the course-registration menu simulator.

use anyhow::Result;
use retort::presets;
use retort::repl::run_menu;
use std::io;

fn main() -> Result<()> {
    init_tracing();
    let courses = presets::builtin_courses();
    run_menu(io::stdin().lock(), io::stdout(), &courses)?;
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
