use serde::{Deserialize, Serialize};

/// One (coin, exchange) trading-pair listing from the CoinCap `/markets`
/// endpoint. Many markets may share a base symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    /// Symbol of the base asset (e.g., "BTC")
    #[serde(rename = "baseSymbol")]
    pub base_symbol: Option<String>,
    /// Identifier of the exchange hosting the pair (e.g., "binance")
    #[serde(rename = "exchangeId")]
    pub exchange_id: Option<String>,
}
