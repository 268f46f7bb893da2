use crate::config::PriceQuery;
use crate::fetch::FetchError;
use crate::model::PriceRecord;
use dialoguer::console::style;
use tracing::{error, info, warn};

const RULE: &str = "---------------------------------";

pub(crate) fn display_fetching(query: &PriceQuery) {
    info!(target: "plain",
        "⏳ Fetching price for {} in {}...",
        query.coin_id,
        query.currency
    );
}

pub(crate) fn display_record(record: &PriceRecord, currency: &str) {
    info!(target: "plain", "{}", render_record(record, currency));
}

pub(crate) fn display_not_found() {
    warn!(target: "plain",
        "{} {}",
        style("⚠️").yellow(),
        "Coin not found. Please check the coin ID (e.g., 'bitcoin' not 'BTC')."
    );
}

pub(crate) fn display_error(err: &FetchError) {
    error!(target: "plain", "{} {}", style("❌").red(), err);
}

/// Bordered block with name, ticker, price and the 24h range.
/// Prices are always shown with two decimals.
pub(crate) fn render_record(record: &PriceRecord, currency: &str) -> String {
    let rows = [
        (
            "💰 Coin:         ",
            format!("{} ({})", record.name(), record.symbol().to_uppercase()),
        ),
        (
            "💲 Current Price:",
            format!("{:.2} {}", record.current_price(), currency.to_uppercase()),
        ),
        ("📈 24h High:     ", format!("{:.2}", record.high_24h())),
        ("📉 24h Low:      ", format!("{:.2}", record.low_24h())),
    ];

    let mut out = String::from(RULE);
    for (label, value) in rows {
        out.push('\n');
        out.push_str(&format!("{} {}", style(label).bold(), value));
    }
    out.push('\n');
    out.push_str(RULE);
    out
}
