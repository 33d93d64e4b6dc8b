//! Composite Scorer
//!
//! Turns each eligible ticker into a scored recommendation: trend
//! classification, a 0-100 composite score, a projected target price and the
//! expected return at that target. Results are ranked descending by score.

use chrono::{DateTime, Utc};
use scanner_core::{CoinAnalysis, ScanError, ScreenerConfig, TickerStats, Trend};

use crate::filter::filter_eligible;

/// Classify the 24h trend from the signed percent change.
///
/// First match wins: above +5 and below -5 are the strong bands, +2/-2 the
/// moderate ones, everything in between is sideways.
pub fn classify_trend(percent_change: f64) -> Trend {
    if percent_change > 5.0 {
        Trend::StrongUp
    } else if percent_change > 2.0 {
        Trend::Up
    } else if percent_change < -5.0 {
        Trend::StrongDown
    } else if percent_change < -2.0 {
        Trend::Down
    } else {
        Trend::Sideways
    }
}

/// Linearly map `v` from `[lo, hi]` into `[0, 1]`, clamping at both ends.
///
/// A collapsed range (`hi <= lo`) maps everything to 0; configs that would
/// collapse the ranges used here are rejected by `ScreenerConfig::validate`.
pub fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Scores and ranks eligible tickers
pub struct Screener {
    config: ScreenerConfig,
}

impl Default for Screener {
    fn default() -> Self {
        Self::new()
    }
}

impl Screener {
    /// Create a screener with default config
    pub fn new() -> Self {
        Self {
            config: ScreenerConfig::default(),
        }
    }

    /// Create a screener with custom config, rejecting invalid configs up front
    pub fn with_config(config: ScreenerConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Composite recommendation score in [0, 100].
    ///
    /// Weighted blend of three factors, each normalized to [0, 1] before
    /// weighting: quote volume (how liquid), |percent change| (how much it
    /// moved), and direction (is it moving up at all).
    pub fn score(&self, ticker: &TickerStats) -> u32 {
        let volume_factor = normalize(ticker.quote_volume_24h, 0.0, self.config.volume_norm_cap);
        let volatility_factor = normalize(
            ticker.price_change_percent_24h.abs(),
            0.0,
            self.config.volatility_norm_cap,
        );
        let direction_factor = if ticker.price_change_percent_24h > 0.0 {
            1.0
        } else {
            0.0
        };

        let score = volume_factor * self.config.volume_weight
            + volatility_factor * self.config.volatility_weight
            + direction_factor * self.config.direction_weight;

        score.round() as u32
    }

    /// Projected target price.
    ///
    /// Uptrend: extrapolate half the 24h range volatility from the current
    /// price, capped 5% above the 24h high so a spike never projects an
    /// unbounded target. Downtrend or flat: model a bounce proportional to
    /// the drop, capped at the 24h high. The downtrend cap is the observed
    /// high itself, not high*1.05, and the bounce term has no lower bound;
    /// both quirks are intentional and kept as the production scanner has
    /// them.
    pub fn target_price(&self, ticker: &TickerStats) -> Result<f64, ScanError> {
        if ticker.last_price <= 0.0 {
            return Err(ScanError::BadTicker {
                symbol: ticker.symbol.clone(),
                reason: format!("non-positive last price {}", ticker.last_price),
            });
        }

        let p = ticker.price_change_percent_24h;
        if p > 0.0 {
            if ticker.low_price_24h <= 0.0 {
                return Err(ScanError::BadTicker {
                    symbol: ticker.symbol.clone(),
                    reason: format!("non-positive 24h low {}", ticker.low_price_24h),
                });
            }
            let range = ticker.high_price_24h - ticker.low_price_24h;
            let volatility = range / ticker.low_price_24h;
            let extrapolated =
                ticker.last_price * (1.0 + volatility * self.config.uptrend_volatility_factor);
            Ok(extrapolated.min(ticker.high_price_24h * self.config.uptrend_high_cap))
        } else {
            let bounce = ticker.last_price * (1.0 + p.abs() * self.config.bounce_factor);
            Ok(bounce.min(ticker.high_price_24h))
        }
    }

    /// Score a single ticker into an analysis record.
    ///
    /// The snapshot timestamp comes from the caller, so identical inputs
    /// always produce identical records.
    pub fn analyze(
        &self,
        ticker: &TickerStats,
        analyzed_at: DateTime<Utc>,
    ) -> Result<CoinAnalysis, ScanError> {
        let target_price = self.target_price(ticker)?;
        let expected_profit_percent =
            (target_price - ticker.last_price) / ticker.last_price * 100.0;

        Ok(CoinAnalysis {
            symbol: ticker.symbol.clone(),
            price: ticker.last_price,
            price_change_percent: ticker.price_change_percent_24h,
            quote_volume: ticker.quote_volume_24h,
            trend: classify_trend(ticker.price_change_percent_24h),
            target_price,
            expected_profit_percent,
            score: self.score(ticker),
            analyzed_at,
        })
    }

    /// Run the full pipeline over one snapshot: filter to eligible pairs,
    /// score each, rank descending by score. `analyzed_at` is the snapshot
    /// time stamped onto every record; the scheduler supplies it so the
    /// transform itself stays free of wall-clock reads.
    ///
    /// Malformed tickers (non-positive price, non-positive 24h low on an
    /// uptrend) are logged and skipped so one bad row never poisons the
    /// batch. Sort is stable, so equal-score records keep their snapshot
    /// order. Empty snapshot or no eligible pairs yields an empty list.
    pub fn scan(
        &self,
        snapshot: &[TickerStats],
        analyzed_at: DateTime<Utc>,
    ) -> Vec<CoinAnalysis> {
        let eligible = filter_eligible(snapshot, &self.config);

        let mut results: Vec<CoinAnalysis> = eligible
            .into_iter()
            .filter_map(|ticker| match self.analyze(ticker, analyzed_at) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", ticker.symbol, e);
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
