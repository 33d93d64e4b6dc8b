use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 24h rolling statistics for one traded pair, as delivered by the exchange.
///
/// No ordering between `last_price` and the 24h high/low is assumed: the
/// current price can have moved past the recorded range by query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerStats {
    pub symbol: String,
    pub last_price: f64,
    pub high_price_24h: f64,
    pub low_price_24h: f64,
    pub price_change_percent_24h: f64,
    pub volume_24h: f64,
    /// Volume denominated in the quote currency; this is the liquidity gate.
    pub quote_volume_24h: f64,
}

/// 24h price trend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    StrongUp,
    Up,
    Sideways,
    Down,
    StrongDown,
}

impl Trend {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Trend::StrongUp => "Strong Up",
            Trend::Up => "Up",
            Trend::Sideways => "Sideways",
            Trend::Down => "Down",
            Trend::StrongDown => "Strong Down",
        }
    }
}

/// One scored recommendation produced by the screener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinAnalysis {
    /// Trading pair symbol
    pub symbol: String,
    /// Last traded price, carried through from the snapshot
    pub price: f64,
    /// 24h percent change, carried through from the snapshot
    pub price_change_percent: f64,
    /// 24h quote-denominated volume, carried through from the snapshot
    pub quote_volume: f64,
    /// Trend classification from the 24h percent change
    pub trend: Trend,
    /// Projected target price
    pub target_price: f64,
    /// Expected return at the target, percent of current price
    pub expected_profit_percent: f64,
    /// Composite recommendation score (0-100)
    pub score: u32,
    /// When this record was computed
    pub analyzed_at: DateTime<Utc>,
}
