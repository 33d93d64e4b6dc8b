//! Binance REST client for 24h ticker snapshots.
//!
//! Thin snapshot provider over `GET /api/v3/ticker/24hr`, which returns the
//! rolling 24h statistics for every traded pair in one response. Binance
//! encodes all numeric fields as JSON strings; rows that fail to parse are
//! logged and dropped rather than failing the whole snapshot.

use async_trait::async_trait;
use reqwest::Client;
use scanner_core::{ScanError, SnapshotProvider, TickerStats};
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://api.binance.com";

/// Raw 24h ticker row as Binance serves it (subset of fields)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Raw24hTicker {
    symbol: String,
    last_price: String,
    high_price: String,
    low_price: String,
    price_change_percent: String,
    volume: String,
    quote_volume: String,
}

impl Raw24hTicker {
    fn into_stats(self) -> Result<TickerStats, ScanError> {
        fn parse(symbol: &str, field: &str, value: &str) -> Result<f64, ScanError> {
            value.parse::<f64>().map_err(|_| {
                ScanError::ParseError(format!("{}: bad {} '{}'", symbol, field, value))
            })
        }

        Ok(TickerStats {
            last_price: parse(&self.symbol, "lastPrice", &self.last_price)?,
            high_price_24h: parse(&self.symbol, "highPrice", &self.high_price)?,
            low_price_24h: parse(&self.symbol, "lowPrice", &self.low_price)?,
            price_change_percent_24h: parse(
                &self.symbol,
                "priceChangePercent",
                &self.price_change_percent,
            )?,
            volume_24h: parse(&self.symbol, "volume", &self.volume)?,
            quote_volume_24h: parse(&self.symbol, "quoteVolume", &self.quote_volume)?,
            symbol: self.symbol,
        })
    }
}

#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BinanceClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, e.g. a mock server in tests
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            ..Self::new()
        }
    }

    /// Fetch the full 24h ticker snapshot, one row per traded pair.
    ///
    /// Retries once on HTTP 429 after a short pause; any other non-success
    /// status is an ApiError.
    pub async fn fetch_24h_tickers(&self) -> Result<Vec<TickerStats>, ScanError> {
        let url = format!("{}/api/v3/ticker/24hr", self.base_url);

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::ApiError(e.to_string()))?;

        if response.status().as_u16() == 429 {
            tracing::warn!("Rate limited by Binance, retrying in 5s");
            tokio::time::sleep(Duration::from_secs(5)).await;
            response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ScanError::ApiError(e.to_string()))?;
        }

        if !response.status().is_success() {
            return Err(ScanError::ApiError(format!(
                "ticker/24hr returned HTTP {}",
                response.status()
            )));
        }

        let raw: Vec<Raw24hTicker> = response
            .json()
            .await
            .map_err(|e| ScanError::ParseError(e.to_string()))?;

        let total = raw.len();
        let stats: Vec<TickerStats> = raw
            .into_iter()
            .filter_map(|row| match row.into_stats() {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::warn!("Dropping ticker row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} tickers ({} rows in payload)", stats.len(), total);
        Ok(stats)
    }
}

#[async_trait]
impl SnapshotProvider for BinanceClient {
    async fn fetch_snapshot(&self) -> Result<Vec<TickerStats>, ScanError> {
        self.fetch_24h_tickers().await
    }
}
