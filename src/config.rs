use derive_builder::Builder;
use std::time::Duration;

/// CoinGecko public markets endpoint.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Upper bound for the whole request, connect through last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct FetcherConfig {
    /// Markets endpoint, query parameters are appended to it
    #[builder(setter(into), default = "DEFAULT_API_URL.to_string()")]
    pub base_url: String,
    /// Request timeout
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
}

impl FetcherConfig {
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The pair the user asked about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceQuery {
    pub coin_id: String,
    pub currency: String,
}
