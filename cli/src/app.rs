use common::Result;
use connectors::MarketDataSource;
use screener::filter::screen_assets;
use screener::listings::ListingIndex;
use screener::{report, sheet};
use tracing::{error, info};

use crate::config::AppConfig;

/// Run one full screen: fetch assets and markets, index listings, filter,
/// export, report. A failed or empty fetch for either resource ends the
/// run with a console message before the filter stage.
pub async fn run(source: &dyn MarketDataSource, config: &AppConfig) -> Result<()> {
    info!("Fetching coin data from CoinCap API");
    let assets = match source.fetch_assets().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to fetch coin data: {}", e);
            Vec::new()
        }
    };
    if assets.is_empty() {
        println!("No coin data available. Exiting.");
        return Ok(());
    }
    info!("Fetched data for {} coins", assets.len());

    info!("Fetching exchange market data");
    let markets = match source.fetch_markets().await {
        Ok(markets) => markets,
        Err(e) => {
            error!("Failed to fetch market data: {}", e);
            Vec::new()
        }
    };
    if markets.is_empty() {
        println!("No market data available. Exiting.");
        return Ok(());
    }
    info!("Fetched {} markets", markets.len());

    let listings = ListingIndex::from_markets(&markets);
    info!("Found listings for {} unique coins", listings.coin_count());

    let outcome = screen_assets(&assets, &listings);
    report::print_filter_summary(&outcome);

    println!(
        "\nFound {} coins matching all criteria.",
        outcome.accepted.len()
    );
    sheet::write_workbook(&config.output_path, &outcome.accepted)?;
    println!("Data saved to {}", config.output_path.display());

    report::print_rankings(&outcome.accepted);

    Ok(())
}
