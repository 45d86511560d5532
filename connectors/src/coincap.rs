use crate::MarketDataSource;
use async_trait::async_trait;
use common::{
    models::{Asset, Market},
    Error, Result,
};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, error};

const COINCAP_API_URL: &str = "https://api.coincap.io/v2";

/// Records requested per page. CoinCap caps `limit` at 2000.
const PAGE_LIMIT: usize = 2000;

pub struct CoinCapConnector {
    client: reqwest::Client,
    base_url: String,
}

impl CoinCapConnector {
    pub fn new() -> Self {
        Self::with_base_url(COINCAP_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Page through a CoinCap collection with an offset/limit cursor,
    /// accumulating every record in fetch order.
    ///
    /// Stops on an empty page or a page shorter than the limit. Any
    /// transport or HTTP-status error aborts the whole fetch; a partial
    /// list is never returned.
    async fn fetch_paginated<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut records = Vec::new();
        let mut offset = 0usize;

        loop {
            debug!("Fetching {} page at offset {}", endpoint, offset);

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("offset", offset.to_string()),
                    ("limit", PAGE_LIMIT.to_string()),
                ])
                .send()
                .await
                .map_err(Error::HttpError)?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!("CoinCap API error: {} - {}", status, error_text);
                return Err(Error::ApiError(format!(
                    "CoinCap API error: {} - {}",
                    status, error_text
                )));
            }

            let page: PageResponse<T> = response.json().await.map_err(|e| {
                Error::ParseError(format!("Failed to parse CoinCap response: {}", e))
            })?;

            let fetched = page.data.len();
            if fetched == 0 {
                break;
            }

            records.extend(page.data);
            offset += PAGE_LIMIT;

            // A short page is the last page.
            if fetched < PAGE_LIMIT {
                break;
            }
        }

        Ok(records)
    }
}

impl Default for CoinCapConnector {
    fn default() -> Self {
        Self::new()
    }
}

/// CoinCap wraps every collection in a `data` envelope.
#[derive(Debug, Deserialize)]
struct PageResponse<T> {
    data: Vec<T>,
}

#[async_trait]
impl MarketDataSource for CoinCapConnector {
    async fn fetch_assets(&self) -> Result<Vec<Asset>> {
        self.fetch_paginated("assets").await
    }

    async fn fetch_markets(&self) -> Result<Vec<Market>> {
        self.fetch_paginated("markets").await
    }
}
