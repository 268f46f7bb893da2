use crate::utils::serialization::null_as_default;
use serde::Deserialize;

/// One row of the `/coins/markets` response.
///
/// Only the fields we display are mapped; everything else the upstream sends
/// is ignored. Missing or `null` values decode to their zero value instead of
/// failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    current_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    high_24h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    low_24h: f64,
}

impl PriceRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ticker as sent by the upstream (usually lowercase).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn high_24h(&self) -> f64 {
        self.high_24h
    }

    pub fn low_24h(&self) -> f64 {
        self.low_24h
    }
}
