use crate::config::{FetcherConfig, PriceQuery, DEFAULT_API_URL};
use clap::{Parser, ValueHint};
use std::ffi::OsString;

pub const DEFAULT_COIN: &str = "bitcoin";
pub const DEFAULT_CURRENCY: &str = "usd";

/// Print the current price and 24h range of a cryptocurrency.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The cryptocurrency ID (e.g., bitcoin, ethereum, ripple)
    #[arg(long, default_value = DEFAULT_COIN)]
    pub coin: String,

    /// The target currency (e.g., usd, eur, try)
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Markets endpoint to query
    #[arg(
        long,
        value_hint = ValueHint::Url,
        default_value = DEFAULT_API_URL,
        hide = true
    )]
    pub api_url: String,
}

impl Cli {
    /// Parses the process arguments, accepting `-coin` as well as `--coin`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn query(&self) -> PriceQuery {
        PriceQuery {
            coin_id: self.coin.clone(),
            currency: self.currency.clone(),
        }
    }

    pub fn fetcher_config(&self) -> anyhow::Result<FetcherConfig> {
        FetcherConfig::builder()
            .base_url(self.api_url.clone())
            .build()
            .map_err(Into::into)
    }
}

/// Rewrites single-dash long flags (`-coin`, `-currency=eur`) to their
/// double-dash form. The program name, short flags and anything after a
/// `--` terminator pass through unchanged.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut terminated = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || terminated {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                terminated = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

fn is_single_dash_long(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or_default();
    !rest.starts_with('-')
        && name.len() > 1
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_legacy_flags(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["crypto-price"]);
        assert_eq!(cli.coin, "bitcoin");
        assert_eq!(cli.currency, "usd");
        assert_eq!(cli.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_double_dash_flags() {
        let cli = parse(&["crypto-price", "--coin", "ethereum", "--currency=eur"]);
        assert_eq!(
            cli.query(),
            PriceQuery {
                coin_id: "ethereum".into(),
                currency: "eur".into(),
            }
        );
    }

    #[test]
    fn test_single_dash_flags() {
        let cli = parse(&["crypto-price", "-coin=ripple", "-currency", "try"]);
        assert_eq!(cli.coin, "ripple");
        assert_eq!(cli.currency, "try");
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let out = normalize_legacy_flags(["crypto-price", "-h", "-coin", "-5", "--", "-currency"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(
            out,
            vec!["crypto-price", "-h", "--coin", "-5", "--", "-currency"]
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(normalize_legacy_flags(["crypto-price", "-verbose"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_fetcher_config_uses_api_url() {
        let cli = parse(&["crypto-price", "--api-url", "http://127.0.0.1:1234/markets"]);
        let config = cli.fetcher_config().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:1234/markets");
    }
}
