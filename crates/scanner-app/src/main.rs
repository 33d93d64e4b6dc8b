//! coinscan: periodically pull the Binance 24h ticker snapshot, score the
//! liquid USDT pairs, and print the top recommendations as a table.
//!
//! Usage:
//!   cargo run -p scanner-app               # refresh loop
//!   cargo run -p scanner-app -- --once     # single scan, then exit
//!
//! Env: REFRESH_SECS (60), TOP_N (20), MIN_QUOTE_VOLUME (1000000),
//!      QUOTE_SUFFIX (USDT), RUST_LOG.

use std::time::Duration;

use anyhow::{Context, Result};
use binance_client::BinanceClient;
use chrono::Utc;
use scanner_core::{ScreenerConfig, SnapshotProvider};
use screener::Screener;
use tokio::time;
use tracing::{error, info};

mod render;

use render::render_table;

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinscan=info,binance_client=warn".into()),
        )
        .init();

    let once = std::env::args().any(|a| a == "--once");
    let refresh_secs: u64 = env_parse("REFRESH_SECS", 60);
    let top_n: usize = env_parse("TOP_N", 20);

    let config = ScreenerConfig {
        min_quote_volume: env_parse("MIN_QUOTE_VOLUME", 1_000_000.0),
        quote_suffix: std::env::var("QUOTE_SUFFIX").unwrap_or_else(|_| "USDT".to_string()),
        ..Default::default()
    };
    let screener = Screener::with_config(config).context("invalid screener config")?;
    let client = BinanceClient::new();

    info!(
        "Starting coinscan: refresh {}s, top {}, suffix {}, min quote volume {}",
        refresh_secs,
        top_n,
        screener.config().quote_suffix,
        screener.config().min_quote_volume
    );

    let mut interval = time::interval(Duration::from_secs(refresh_secs));
    loop {
        interval.tick().await;

        match client.fetch_snapshot().await {
            Ok(snapshot) => {
                let results = screener.scan(&snapshot, Utc::now());
                info!(
                    "Scanned {} tickers, {} eligible",
                    snapshot.len(),
                    results.len()
                );
                println!("{}", render_table(&results, top_n));
            }
            Err(e) => {
                // Skip the cycle; a partial snapshot is worse than a stale one
                error!("Snapshot fetch failed, skipping cycle: {}", e);
            }
        }

        if once {
            break;
        }
    }

    Ok(())
}
