use crate::args::Cli;
use crate::config::PriceQuery;
use crate::fetch::{FetchError, PriceFetcher};
use crate::model::PriceRecord;
use crate::ui::report::{display_error, display_fetching, display_not_found, display_record};
use crate::ui::spinner::RequestSpinner;

pub struct Application {
    query: PriceQuery,
    fetcher: PriceFetcher,
}

impl Application {
    pub fn init() -> anyhow::Result<Application> {
        let cli = Cli::parse_normalized();
        Self::from_cli(&cli)
    }

    pub fn from_cli(cli: &Cli) -> anyhow::Result<Application> {
        let fetcher = PriceFetcher::new(&cli.fetcher_config()?)?;

        Ok(Application {
            query: cli.query(),
            fetcher,
        })
    }

    /// Fetches and prints the report. The returned value is what was shown;
    /// `Ok(None)` is the "coin not found" notice.
    pub async fn run(&self) -> Result<Option<PriceRecord>, FetchError> {
        display_fetching(&self.query);

        let spinner = RequestSpinner::start(&self.query);
        let result = self
            .fetcher
            .fetch(&self.query.coin_id, &self.query.currency)
            .await;
        drop(spinner);

        match &result {
            Ok(Some(record)) => display_record(record, &self.query.currency),
            Ok(None) => display_not_found(),
            Err(err) => display_error(err),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::normalize_legacy_flags;
    use clap::Parser;

    #[tokio::test]
    async fn test_run_reports_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/markets")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let api_url = format!("{}/markets", server.url());
        let cli = Cli::try_parse_from(normalize_legacy_flags([
            "crypto-price",
            "-coin",
            "notacoin",
            "-api-url",
            api_url.as_str(),
        ]))
        .unwrap();

        let app = Application::from_cli(&cli).unwrap();
        assert!(app.run().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_passes_errors_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/markets")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let cli = Cli::try_parse_from([
            "crypto-price".to_string(),
            "--api-url".to_string(),
            format!("{}/markets", server.url()),
        ])
        .unwrap();

        let app = Application::from_cli(&cli).unwrap();
        assert!(matches!(app.run().await, Err(FetchError::Decode { .. })));
    }
}
