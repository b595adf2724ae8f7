//! The crypto advisor's turn logic.
//!
//! One turn: resolve the query in keyword-set mode, then render each fired
//! intent as a catalog query. The `info` intent is exclusive by explicit
//! precedence rule: when it fires, it answers alone for that turn even if
//! keywords for other intents are also present.

use crate::catalog::Catalog;
use crate::presets;
use crate::resolve::resolve_keywords;
use retort_core::{HandlerTag, Normalizer, Outcome, Registry, RegistryError};

/// Tag for the exclusive coin-information intent.
pub const INFO: HandlerTag = HandlerTag("info");
/// Tag for the sustainability recommendation intent.
pub const SUSTAINABILITY: HandlerTag = HandlerTag("sustainability");
/// Tag for the trending-coins intent.
pub const TRENDING: HandlerTag = HandlerTag("trending");
/// Tag for the long-term-growth intent.
pub const LONG_TERM: HandlerTag = HandlerTag("long_term");
/// Tag for the profitability intent.
pub const PROFITABILITY: HandlerTag = HandlerTag("profitability");

/// The advisor: an intent registry over a coin catalog.
///
/// Resolution is pure; `advise` returns the response lines for one turn and
/// mutates nothing.
pub struct Advisor {
    catalog: Catalog,
    registry: Registry,
}

impl Advisor {
    /// An advisor over the given catalog with the standard intent rules.
    pub fn new(catalog: Catalog) -> Result<Self, RegistryError> {
        Ok(Self {
            catalog,
            registry: presets::crypto_intents()?,
        })
    }

    /// The catalog this advisor answers from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer one query: the response lines for this turn.
    pub fn advise<N: Normalizer>(&self, query: &str, normalizer: &N) -> Vec<String> {
        let outcome = resolve_keywords(query, &self.registry, normalizer);
        let Outcome::Fired(fired) = outcome else {
            return vec![
                "🤖 I'm not sure what you meant. Try asking about trends, sustainability, or profits."
                    .to_string(),
                "Type 'help' for available commands.".to_string(),
            ];
        };

        let mut lines = Vec::new();
        for rule in fired {
            match rule.tag() {
                Some(INFO) => return self.info_lines(query),
                Some(SUSTAINABILITY) => self.sustainability_lines(&mut lines),
                Some(TRENDING) => self.trending_lines(&mut lines),
                Some(LONG_TERM) => self.long_term_lines(&mut lines),
                Some(PROFITABILITY) => self.profitability_lines(&mut lines),
                _ => {}
            }
        }
        lines
    }

    fn info_lines(&self, query: &str) -> Vec<String> {
        match self.catalog.lookup(query) {
            Some(coin) => vec![
                format!("📊 {} Information:", coin.name),
                format!("Description: {}", coin.description),
                format!("Price Trend: {}", coin.price_trend),
                format!("Market Cap: {}", coin.market_cap),
                format!("Sustainability Score: {}/10", coin.sustainability_score),
            ],
            None => vec![format!(
                "🤖 I don't have information about that cryptocurrency. Try {}.",
                known_names(&self.catalog)
            )],
        }
    }

    fn sustainability_lines(&self, lines: &mut Vec<String>) {
        if let Some(coin) = self.catalog.most_sustainable() {
            lines.push(format!(
                "🌿 {} is highly sustainable and eco-friendly! Great for green investing.",
                coin.name
            ));
            lines.push(format!(
                "Sustainability Score: {}/10",
                coin.sustainability_score
            ));
        }
    }

    fn trending_lines(&self, lines: &mut Vec<String>) {
        let trending = self.catalog.trending();
        if trending.is_empty() {
            lines.push("📉 No cryptocurrencies are currently trending up.".to_string());
        } else {
            lines.push("📈 These cryptos are currently trending up:".to_string());
            for coin in trending {
                lines.push(format!(" - {}", coin.name));
            }
        }
    }

    fn long_term_lines(&self, lines: &mut Vec<String>) {
        let picks = self.catalog.long_term();
        if picks.is_empty() {
            lines.push(
                "🤔 No cryptocurrencies currently meet the criteria for long-term investment."
                    .to_string(),
            );
        } else {
            for coin in picks {
                lines.push(format!(
                    "🕒 {} is rising and sustainable – ideal for long-term growth!",
                    coin.name
                ));
            }
        }
    }

    fn profitability_lines(&self, lines: &mut Vec<String>) {
        let picks = self.catalog.profitable();
        if picks.is_empty() {
            lines.push(
                "🤔 No cryptocurrencies currently meet the criteria for profitable investment."
                    .to_string(),
            );
        } else {
            for coin in picks {
                lines.push(format!(
                    "💸 Consider investing in {} — it's both profitable and growing!",
                    coin.name
                ));
            }
        }
    }
}

fn known_names(catalog: &Catalog) -> String {
    let names: Vec<_> = catalog.coins().iter().map(|c| c.name.as_str()).collect();
    match names.as_slice() {
        [] => "again later".to_string(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}
