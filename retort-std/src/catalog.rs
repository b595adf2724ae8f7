//! The static cryptocurrency reference table and its queries.
//!
//! The catalog is loaded once, at startup, and never mutated: either the
//! [builtin](Catalog::builtin) three-coin table or a JSON document via
//! [`Catalog::from_json`]. Queries are plain predicate filters and
//! reductions over catalog order; at this scale (a handful of records)
//! nothing more is warranted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Price trajectory of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Price is going up.
    Rising,
    /// Price is flat.
    Stable,
    /// Price is going down.
    Falling,
}

/// A coarse low/medium/high classification (market cap, energy use).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Bottom tier.
    Low,
    /// Middle tier.
    Medium,
    /// Top tier.
    High,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Falling => "falling",
        })
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        })
    }
}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Display name, e.g. `"Bitcoin"`.
    pub name: String,
    /// Price trajectory.
    pub price_trend: Trend,
    /// Market capitalization class.
    pub market_cap: Level,
    /// Energy consumption class.
    pub energy_use: Level,
    /// Sustainability score, 0 through 10.
    pub sustainability_score: u8,
    /// One-line description.
    pub description: String,
}

/// Errors raised while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The JSON document did not parse into a list of coins.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A sustainability score fell outside 0 through 10.
    #[error("sustainability score {score} out of range for {name}")]
    ScoreOutOfRange {
        /// The offending coin.
        name: String,
        /// The score it carried.
        score: u8,
    },
}

/// The ordered, immutable coin table.
pub struct Catalog {
    coins: Vec<Coin>,
}

impl Catalog {
    /// The three-coin table the original advisor shipped with.
    pub fn builtin() -> Self {
        Self {
            coins: vec![
                Coin {
                    name: "Bitcoin".to_string(),
                    price_trend: Trend::Rising,
                    market_cap: Level::High,
                    energy_use: Level::High,
                    sustainability_score: 3,
                    description: "The first and most well-known cryptocurrency".to_string(),
                },
                Coin {
                    name: "Ethereum".to_string(),
                    price_trend: Trend::Stable,
                    market_cap: Level::High,
                    energy_use: Level::Medium,
                    sustainability_score: 6,
                    description: "A platform for decentralized applications".to_string(),
                },
                Coin {
                    name: "Cardano".to_string(),
                    price_trend: Trend::Rising,
                    market_cap: Level::Medium,
                    energy_use: Level::Low,
                    sustainability_score: 8,
                    description: "A proof-of-stake blockchain platform".to_string(),
                },
            ],
        }
    }

    /// Load a catalog from a JSON array of coin records.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let coins: Vec<Coin> = serde_json::from_str(document)?;
        for coin in &coins {
            if coin.sustainability_score > 10 {
                return Err(CatalogError::ScoreOutOfRange {
                    name: coin.name.clone(),
                    score: coin.sustainability_score,
                });
            }
        }
        Ok(Self { coins })
    }

    /// Build a catalog from already-validated records (tests, fixtures).
    pub fn from_coins(coins: Vec<Coin>) -> Self {
        Self { coins }
    }

    /// All records in catalog order.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// The single coin with the maximum sustainability score.
    ///
    /// Ties break by catalog order: the first maximal entry wins. `None`
    /// only for an empty catalog.
    pub fn most_sustainable(&self) -> Option<&Coin> {
        self.coins.iter().fold(None, |best, coin| match best {
            Some(b) if coin.sustainability_score <= b.sustainability_score => best,
            _ => Some(coin),
        })
    }

    /// All coins whose price trend is rising, in catalog order.
    pub fn trending(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|coin| coin.price_trend == Trend::Rising)
            .collect()
    }

    /// Rising coins with sustainability score strictly greater than 6.
    pub fn long_term(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|coin| coin.price_trend == Trend::Rising && coin.sustainability_score > 6)
            .collect()
    }

    /// Rising coins with a high market cap.
    pub fn profitable(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|coin| coin.price_trend == Trend::Rising && coin.market_cap == Level::High)
            .collect()
    }

    /// The first coin whose name occurs in the query, case-insensitively.
    pub fn lookup(&self, query: &str) -> Option<&Coin> {
        let lowered = query.to_lowercase();
        self.coins
            .iter()
            .find(|coin| lowered.contains(&coin.name.to_lowercase()))
    }
}
