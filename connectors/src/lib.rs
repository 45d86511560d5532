pub mod coincap;

use async_trait::async_trait;
use common::{
    models::{Asset, Market},
    Result,
};

/// Trait defining the interface for market data providers
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the full list of tradable coin assets, following pagination
    /// to the last page.
    async fn fetch_assets(&self) -> Result<Vec<Asset>>;

    /// Fetch the full list of exchange trading pairs, following pagination
    /// to the last page.
    async fn fetch_markets(&self) -> Result<Vec<Market>>;
}
