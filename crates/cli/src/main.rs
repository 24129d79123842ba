use anyhow::Result;
use clap::Parser;
use crossrate_core::{RateCalculator, RatePair};
use crossrate_engine::{run_poller, PollerConfig, RateCache};
use crossrate_providers::{build_client, coinbase, coinhako};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "crossrate")]
#[command(about = "USD/SGD cross-rate service: polls two exchanges and serves the derived rates")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Seconds between poll cycles
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value_t = 1)]
    poll_interval_secs: u64,

    /// Combined fee surcharge applied to both rate directions, in percent
    #[arg(long, env = "FEE_PERCENT", default_value = "2.00")]
    fee_percent: Decimal,

    /// Timeout for each outbound quote request, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 10)]
    fetch_timeout_secs: u64,

    /// Snapshot age after which /health reports the service stale, in seconds
    #[arg(long, env = "STALE_AFTER_SECS", default_value_t = 10)]
    stale_after_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let client = build_client(Duration::from_secs(cli.fetch_timeout_secs))?;
    let usd_source = coinbase::Coinbase::new(client.clone());
    let sgd_source = coinhako::Coinhako::new(client);

    let cache = RateCache::new(RatePair::seed(coinbase::EXCHANGE, coinhako::EXCHANGE));
    let calculator = RateCalculator::new(cli.fee_percent);

    tracing::info!(
        port = cli.port,
        interval_secs = cli.poll_interval_secs,
        fee_percent = %cli.fee_percent,
        "Starting crossrate service"
    );

    tokio::spawn(run_poller(
        cache.clone(),
        Box::new(usd_source),
        Box::new(sgd_source),
        calculator,
        PollerConfig {
            interval: Duration::from_secs(cli.poll_interval_secs),
        },
    ));

    let bind_addr = format!("0.0.0.0:{}", cli.port);
    let stale_after = chrono::Duration::seconds(cli.stale_after_secs as i64);
    crossrate_api::start_server(cache, stale_after, &bind_addr).await?;

    Ok(())
}
