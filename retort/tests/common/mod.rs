use retort::{Catalog, Coin, Level, Trend};
use std::io::Cursor;

// ============================================================================
// Catalog Fixtures
// ============================================================================

/// The three-coin scenario table used across the filter tests.
pub fn scenario_catalog() -> Catalog {
    Catalog::from_coins(vec![
        coin("Bitcoin", Trend::Rising, Level::High, Level::High, 3),
        coin("Ethereum", Trend::Stable, Level::High, Level::Medium, 6),
        coin("Cardano", Trend::Rising, Level::Medium, Level::Low, 8),
    ])
}

pub fn coin(name: &str, trend: Trend, cap: Level, energy: Level, score: u8) -> Coin {
    Coin {
        name: name.to_string(),
        price_trend: trend,
        market_cap: cap,
        energy_use: energy,
        sustainability_score: score,
        description: format!("{name} test record"),
    }
}

// ============================================================================
// Transcript Helpers
// ============================================================================

/// Join user lines into a scripted stdin.
pub fn script(lines: &[&str]) -> Cursor<String> {
    let mut joined = lines.join("\n");
    joined.push('\n');
    Cursor::new(joined)
}

/// Decode captured output for assertions.
pub fn transcript(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}
