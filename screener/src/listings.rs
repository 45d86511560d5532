use common::models::Market;
use std::collections::{HashMap, HashSet};

/// Mapping from uppercase coin symbol to the set of lowercase exchange ids
/// the coin trades on. A symbol is present only if at least one market
/// record referenced it.
#[derive(Debug, Default)]
pub struct ListingIndex {
    by_symbol: HashMap<String, HashSet<String>>,
}

impl ListingIndex {
    /// Build the index from the full market sequence. Records missing a
    /// base symbol or exchange id are skipped; a coin listed twice on the
    /// same exchange counts once.
    pub fn from_markets(markets: &[Market]) -> Self {
        let mut by_symbol: HashMap<String, HashSet<String>> = HashMap::new();

        for market in markets {
            let symbol = market.base_symbol.as_deref().unwrap_or("").to_uppercase();
            let exchange = market.exchange_id.as_deref().unwrap_or("").to_lowercase();

            if symbol.is_empty() || exchange.is_empty() {
                continue;
            }

            by_symbol.entry(symbol).or_default().insert(exchange);
        }

        Self { by_symbol }
    }

    /// Exchanges listing the given uppercase symbol, if any market did.
    pub fn exchanges_for(&self, symbol: &str) -> Option<&HashSet<String>> {
        self.by_symbol.get(symbol)
    }

    /// Number of distinct coins with at least one listing.
    pub fn coin_count(&self) -> usize {
        self.by_symbol.len()
    }
}
