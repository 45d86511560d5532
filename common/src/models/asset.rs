use serde::{Deserialize, Serialize};

/// One coin's market snapshot as returned by the CoinCap `/assets` endpoint.
///
/// Numeric fields arrive as decimal strings and may be missing or empty for
/// thinly traded coins; validation happens in the screener, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol (e.g., "BTC", "ETH")
    #[serde(default)]
    pub symbol: String,
    /// Human-readable name (e.g., "Bitcoin", "Ethereum")
    #[serde(default)]
    pub name: String,
    /// Market capitalization in USD, as a decimal string
    #[serde(rename = "marketCapUsd")]
    pub market_cap_usd: Option<String>,
    /// Trailing 24h traded volume in USD, as a decimal string
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24hr: Option<String>,
    /// Current price in USD, as a decimal string
    #[serde(rename = "priceUsd")]
    pub price_usd: Option<String>,
}

/// A coin that passed every eligibility gate, with parsed numeric fields
/// and the exchange-tier counts that qualified it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedCoin {
    pub name: String,
    /// Uppercase ticker symbol
    pub symbol: String,
    pub market_cap_usd: f64,
    pub volume_24h: f64,
    pub price_usd: f64,
    /// Number of Tier-1 exchanges listing this coin
    pub tier1_count: u32,
    /// Number of Tier-2 exchanges listing this coin
    pub tier2_count: u32,
}
