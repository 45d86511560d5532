use crate::listings::ListingIndex;
use common::models::{AcceptedCoin, Asset};
use tracing::debug;

/// Exchanges treated as the most liquid and trustworthy venues.
pub const TIER1_EXCHANGES: [&str; 6] = [
    "binance", "coinbase", "kraken", "bitfinex", "okex", "bybit",
];

/// Second-preference venues; a listing here also satisfies the tier gate.
pub const TIER2_EXCHANGES: [&str; 5] = ["gate.io", "kucoin", "huobi", "bitstamp", "crypto.com"];

/// Market cap must be strictly greater than this to pass.
pub const MIN_MARKET_CAP_USD: f64 = 1_000_000.0;

/// 24h volume must be strictly greater than this to pass.
pub const MIN_VOLUME_USD: f64 = 150_000.0;

/// The gate an asset failed, in gate order. Evaluation short-circuits at
/// the first failure, so an asset is counted under exactly one reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    InvalidData,
    MarketCap,
    Volume,
    Exchanges,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::InvalidData => write!(f, "invalid or missing data"),
            RejectReason::MarketCap => write!(f, "market cap below 1M USD threshold"),
            RejectReason::Volume => write!(f, "24h volume below 150K USD threshold"),
            RejectReason::Exchanges => write!(f, "not listed on any Tier-1 or Tier-2 exchange"),
        }
    }
}

/// Per-gate rejection tallies for one filter run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RejectionCounts {
    pub invalid_data: usize,
    pub market_cap: usize,
    pub volume: usize,
    pub exchanges: usize,
}

impl RejectionCounts {
    fn record(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::InvalidData => self.invalid_data += 1,
            RejectReason::MarketCap => self.market_cap += 1,
            RejectReason::Volume => self.volume += 1,
            RejectReason::Exchanges => self.exchanges += 1,
        }
    }
}

/// Accepted coins plus the rejection tallies accumulated while screening.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterOutcome {
    pub accepted: Vec<AcceptedCoin>,
    pub rejections: RejectionCounts,
}

/// Evaluate every asset against the ordered gates. One asset's failure
/// never aborts processing of the rest.
pub fn screen_assets(assets: &[Asset], listings: &ListingIndex) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for asset in assets {
        match evaluate(asset, listings) {
            Ok(coin) => outcome.accepted.push(coin),
            Err(reason) => {
                debug!("Skipping {}: {}", asset.symbol.to_uppercase(), reason);
                outcome.rejections.record(reason);
            }
        }
    }

    outcome
}

/// Apply the gates to one asset, short-circuiting at the first failure.
/// Gate order: data validity, market cap, volume, exchange tiers.
fn evaluate(asset: &Asset, listings: &ListingIndex) -> Result<AcceptedCoin, RejectReason> {
    let symbol = asset.symbol.to_uppercase();
    if symbol.is_empty() {
        return Err(RejectReason::InvalidData);
    }

    let market_cap = parse_required(asset.market_cap_usd.as_deref())?;
    let volume = parse_required(asset.volume_usd_24hr.as_deref())?;
    let price = parse_required(asset.price_usd.as_deref())?;

    if market_cap <= MIN_MARKET_CAP_USD {
        return Err(RejectReason::MarketCap);
    }

    if volume <= MIN_VOLUME_USD {
        return Err(RejectReason::Volume);
    }

    let (tier1_count, tier2_count) = tier_counts(&symbol, listings);
    if tier1_count + tier2_count == 0 {
        return Err(RejectReason::Exchanges);
    }

    Ok(AcceptedCoin {
        name: asset.name.clone(),
        symbol,
        market_cap_usd: market_cap,
        volume_24h: volume,
        price_usd: price,
        tier1_count,
        tier2_count,
    })
}

/// Missing, empty, or non-numeric decimal strings are validity failures,
/// never panics.
fn parse_required(value: Option<&str>) -> Result<f64, RejectReason> {
    match value {
        Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| RejectReason::InvalidData),
        _ => Err(RejectReason::InvalidData),
    }
}

/// Count the asset's listed exchanges in each tier. An unindexed symbol
/// counts as listed nowhere.
fn tier_counts(symbol: &str, listings: &ListingIndex) -> (u32, u32) {
    match listings.exchanges_for(symbol) {
        Some(exchanges) => {
            let tier1 = exchanges
                .iter()
                .filter(|e| TIER1_EXCHANGES.contains(&e.as_str()))
                .count() as u32;
            let tier2 = exchanges
                .iter()
                .filter(|e| TIER2_EXCHANGES.contains(&e.as_str()))
                .count() as u32;
            (tier1, tier2)
        }
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::Market;

    fn asset(symbol: &str, cap: &str, volume: &str, price: &str) -> Asset {
        Asset {
            symbol: symbol.to_string(),
            name: format!("{} Coin", symbol),
            market_cap_usd: Some(cap.to_string()),
            volume_usd_24hr: Some(volume.to_string()),
            price_usd: Some(price.to_string()),
        }
    }

    fn index_of(listings: &[(&str, &str)]) -> ListingIndex {
        let markets: Vec<Market> = listings
            .iter()
            .map(|(base, exchange)| Market {
                base_symbol: Some(base.to_string()),
                exchange_id: Some(exchange.to_string()),
            })
            .collect();
        ListingIndex::from_markets(&markets)
    }

    #[test]
    fn low_market_cap_is_rejected_regardless_of_other_fields() {
        let listings = index_of(&[("ABC", "binance")]);
        let assets = vec![asset("ABC", "1000000", "999999999", "1.0")];

        let outcome = screen_assets(&assets, &listings);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejections.market_cap, 1);
        assert_eq!(outcome.rejections.volume, 0);
    }

    #[test]
    fn market_cap_threshold_is_strict() {
        let listings = index_of(&[("ABC", "binance")]);
        // Exactly at the threshold fails; one above passes the gate.
        let at = vec![asset("ABC", "1000000", "200000", "1.0")];
        let above = vec![asset("ABC", "1000001", "200000", "1.0")];

        assert_eq!(screen_assets(&at, &listings).rejections.market_cap, 1);
        assert_eq!(screen_assets(&above, &listings).accepted.len(), 1);
    }

    #[test]
    fn low_volume_is_rejected_after_market_cap_passes() {
        let listings = index_of(&[("ABC", "binance")]);
        let assets = vec![asset("ABC", "2000000", "150000", "1.0")];

        let outcome = screen_assets(&assets, &listings);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejections.volume, 1);
        assert_eq!(outcome.rejections.market_cap, 0);
    }

    #[test]
    fn unlisted_coin_is_rejected_under_exchanges() {
        let listings = index_of(&[("ABC", "some-dex")]);
        let assets = vec![
            asset("ABC", "2000000", "200000", "1.0"),
            asset("XYZ", "2000000", "200000", "1.0"),
        ];

        let outcome = screen_assets(&assets, &listings);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejections.exchanges, 2);
    }

    #[test]
    fn single_tier2_listing_is_accepted_with_counts() {
        let listings = index_of(&[("ABC", "kucoin")]);
        let assets = vec![asset("ABC", "2000000", "200000", "0.5")];

        let outcome = screen_assets(&assets, &listings);

        assert_eq!(outcome.accepted.len(), 1);
        let coin = &outcome.accepted[0];
        assert_eq!(coin.symbol, "ABC");
        assert_eq!(coin.tier1_count, 0);
        assert_eq!(coin.tier2_count, 1);
        assert_eq!(coin.market_cap_usd, 2_000_000.0);
        assert_eq!(coin.volume_24h, 200_000.0);
        assert_eq!(coin.price_usd, 0.5);
    }

    #[test]
    fn tier_counts_cover_both_tiers() {
        let listings = index_of(&[
            ("ABC", "binance"),
            ("ABC", "kraken"),
            ("ABC", "kucoin"),
            ("ABC", "some-dex"),
        ]);
        let assets = vec![asset("ABC", "2000000", "200000", "1.0")];

        let outcome = screen_assets(&assets, &listings);

        assert_eq!(outcome.accepted[0].tier1_count, 2);
        assert_eq!(outcome.accepted[0].tier2_count, 1);
    }

    #[test]
    fn empty_market_cap_is_invalid_data_and_never_reaches_later_gates() {
        let listings = index_of(&[("ABC", "binance")]);
        let assets = vec![asset("ABC", "", "200000", "1.0")];

        let outcome = screen_assets(&assets, &listings);

        assert_eq!(outcome.rejections.invalid_data, 1);
        assert_eq!(outcome.rejections.market_cap, 0);
    }

    #[test]
    fn missing_and_malformed_fields_are_invalid_data() {
        let listings = index_of(&[("ABC", "binance")]);
        let assets = vec![
            Asset {
                symbol: "ABC".to_string(),
                name: "ABC Coin".to_string(),
                market_cap_usd: None,
                volume_usd_24hr: Some("200000".to_string()),
                price_usd: Some("1.0".to_string()),
            },
            asset("ABC", "not-a-number", "200000", "1.0"),
            asset("ABC", "2000000", "200000", "garbage"),
        ];

        let outcome = screen_assets(&assets, &listings);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejections.invalid_data, 3);
    }

    #[test]
    fn one_bad_asset_does_not_abort_the_batch() {
        let listings = index_of(&[("GOOD", "coinbase")]);
        let assets = vec![
            asset("BAD", "", "", ""),
            asset("GOOD", "5000000", "300000", "2.0"),
        ];

        let outcome = screen_assets(&assets, &listings);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].symbol, "GOOD");
        assert_eq!(outcome.rejections.invalid_data, 1);
    }

    #[test]
    fn identical_inputs_produce_identical_outcomes() {
        let listings = index_of(&[("ABC", "binance"), ("DEF", "kucoin")]);
        let assets = vec![
            asset("ABC", "2000000", "200000", "1.0"),
            asset("DEF", "3000000", "250000", "2.0"),
            asset("GHI", "500000", "200000", "1.0"),
        ];

        let first = screen_assets(&assets, &listings);
        let second = screen_assets(&assets, &listings);

        assert_eq!(first, second);
    }
}
