mod app;
mod args;
mod config;
mod fetch;
mod model;
mod ui;
mod utils;

pub use app::Application;
pub use args::{normalize_legacy_flags, Cli};
pub use config::{
    FetcherConfig, FetcherConfigBuilder, PriceQuery, DEFAULT_API_URL, DEFAULT_TIMEOUT,
};
pub use fetch::{FetchError, PriceFetcher};
pub use model::PriceRecord;
