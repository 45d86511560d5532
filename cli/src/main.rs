mod app;
mod config;

use config::AppConfig;
use connectors::coincap::CoinCapConnector;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    info!("Starting coin screener, output: {}", config.output_path.display());

    let connector = CoinCapConnector::with_base_url(config.api_url.as_str());
    app::run(&connector, &config).await?;

    Ok(())
}
