use serde::{Deserialize, Serialize};

use crate::ScanError;

/// All tunable constants of the screener in one place.
///
/// Defaults mirror the production scanner: a $1M liquidity floor on
/// USDT-quoted pairs, and a 30/40/30 volume/volatility/direction score blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Quote-currency suffix a symbol must end with to be eligible
    pub quote_suffix: String,
    /// Minimum 24h quote volume (strict `>` gate)
    pub min_quote_volume: f64,
    /// Upper bound of the linear quote-volume normalization range
    pub volume_norm_cap: f64,
    /// Upper bound of the linear |percent-change| normalization range
    pub volatility_norm_cap: f64,
    /// Weight of the volume factor in the composite score
    pub volume_weight: f64,
    /// Weight of the volatility factor in the composite score
    pub volatility_weight: f64,
    /// Weight of the direction factor in the composite score
    pub direction_weight: f64,
    /// Fraction of 24h range volatility extrapolated into an uptrend target
    pub uptrend_volatility_factor: f64,
    /// Uptrend target cap, as a multiple of the 24h high
    pub uptrend_high_cap: f64,
    /// Fraction of a drop's magnitude modeled as a bounce in the downtrend target
    pub bounce_factor: f64,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            quote_suffix: "USDT".to_string(),
            min_quote_volume: 1_000_000.0,
            volume_norm_cap: 1_000_000_000.0,
            volatility_norm_cap: 30.0,
            volume_weight: 30.0,
            volatility_weight: 40.0,
            direction_weight: 30.0,
            uptrend_volatility_factor: 0.5,
            uptrend_high_cap: 1.05,
            bounce_factor: 0.3,
        }
    }
}

impl ScreenerConfig {
    /// Reject configs whose normalization ranges collapse to a point, which
    /// would make `normalize` divide by zero, or whose weights are negative,
    /// which would break the 0-100 score bound.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.volume_norm_cap <= 0.0 {
            return Err(ScanError::InvalidConfig(format!(
                "volume_norm_cap must be positive, got {}",
                self.volume_norm_cap
            )));
        }
        if self.volatility_norm_cap <= 0.0 {
            return Err(ScanError::InvalidConfig(format!(
                "volatility_norm_cap must be positive, got {}",
                self.volatility_norm_cap
            )));
        }
        if self.volume_weight < 0.0 || self.volatility_weight < 0.0 || self.direction_weight < 0.0
        {
            return Err(ScanError::InvalidConfig(
                "score weights must be non-negative".to_string(),
            ));
        }
        if self.quote_suffix.is_empty() {
            return Err(ScanError::InvalidConfig(
                "quote_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum attainable composite score under this config
    pub fn max_score(&self) -> f64 {
        self.volume_weight + self.volatility_weight + self.direction_weight
    }
}
