//! Single-shot client for the CoinGecko markets endpoint.

use crate::config::FetcherConfig;
use crate::model::PriceRecord;
use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

/// Hard failures of a price lookup. An empty result is not one of them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The GET never produced a response (DNS, refused, timeout).
    #[error("error fetching data: {0}")]
    Request(#[source] reqwest::Error),
    /// Headers arrived but the body could not be read to the end.
    #[error("error reading response: {0}")]
    Read(#[source] reqwest::Error),
    /// The body is not a JSON array of market records.
    #[error("error parsing JSON (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    base_url: Url,
}

impl PriceFetcher {
    pub fn new(config: &FetcherConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid pricing API url: {}", config.base_url))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Markets URL for one `(coin, currency)` pair.
    pub fn request_url(&self, coin_id: &str, currency: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("vs_currency", currency)
            .append_pair("ids", coin_id);
        url
    }

    /// Looks up one coin. `Ok(None)` means the upstream returned an empty
    /// array (or `null`), i.e. it does not know this coin/currency pairing.
    ///
    /// The first element is returned as-is; upstream ordering is trusted.
    pub async fn fetch(
        &self,
        coin_id: &str,
        currency: &str,
    ) -> Result<Option<PriceRecord>, FetchError> {
        let url = self.request_url(coin_id, currency);
        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            warn!("pricing API answered with {status}");
        }

        // consumes the response, the connection is released here on every path
        let body = resp.bytes().await.map_err(FetchError::Read)?;
        debug!(%status, bytes = body.len(), "response received");

        // a `null` body reads as no records, a `null` row as an all-zero record
        let records: Option<Vec<Option<PriceRecord>>> = serde_json::from_slice(&body)
            .map_err(|source| FetchError::Decode { status, source })?;

        Ok(records
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Option::unwrap_or_default))
    }
}
