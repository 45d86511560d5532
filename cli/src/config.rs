use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the CoinCap v2 API
    pub api_url: String,
    /// Destination of the exported workbook
    pub output_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.coincap.io/v2".to_string(),
            output_path: PathBuf::from("filtered_coins.xlsx"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("COINCAP_API_URL").unwrap_or(defaults.api_url);
        let output_path = std::env::var("OUTPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        Self {
            api_url,
            output_path,
        }
    }
}
