use crate::config::PriceQuery;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

const TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Spinner shown while the markets request is in flight.
///
/// Lives on stderr and only when stderr is a terminal, so piped output never
/// sees it. The line is cleared when the guard is dropped, success or error.
pub(crate) struct RequestSpinner(Option<ProgressBar>);

impl RequestSpinner {
    pub(crate) fn start(query: &PriceQuery) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self(None);
        }
        Self(Some(Self::draw(query)))
    }

    fn draw(query: &PriceQuery) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style.tick_chars(TICKS));
        }
        pb.set_message(format!(
            "asking CoinGecko about {} / {}",
            query.coin_id, query.currency
        ));
        // ticks from indicatif's own thread
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.0.is_some()
    }
}

impl Drop for RequestSpinner {
    fn drop(&mut self) {
        if let Some(pb) = self.0.take() {
            pb.finish_and_clear();
        }
    }
}
