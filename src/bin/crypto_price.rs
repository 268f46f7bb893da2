use anyhow::{Context, Result};
use crypto_price::Application;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("❌ {err:#}");
        return ExitCode::FAILURE;
    }

    let app = match Application::init() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("❌ {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match app.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_logging() -> Result<()> {
    // console lines for the user (only target="plain"), on stdout
    let plain_fmt = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false)
        .compact();
    let plain_layer = tracing_subscriber::fmt::layer()
        .event_format(plain_fmt)
        .with_ansi(std::io::stdout().is_terminal())
        .with_filter(Targets::new().with_target("plain", LevelFilter::TRACE));

    // diagnostics on stderr, RUST_LOG or warn; never repeats the plain lines
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive("plain=off".parse().context("parsing log directive")?);
    let rich_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(plain_layer)
        .with(rich_layer)
        .try_init()
        .context("initializing logging")?;

    Ok(())
}
