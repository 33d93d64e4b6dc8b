//! Eligibility Filter
//!
//! Selects the pairs worth scoring: quote-currency suffix match, some trading
//! activity, and a minimum quote-denominated 24h volume.

use scanner_core::{ScreenerConfig, TickerStats};

/// Filter a snapshot down to eligible pairs, preserving input order.
///
/// A pair is eligible when its symbol ends with the configured quote suffix,
/// it traded at all in the last 24h, and its quote volume clears the
/// liquidity gate (strict `>`, so a pair exactly at the floor is excluded).
/// Never fails; no matches yields an empty vec.
pub fn filter_eligible<'a>(
    snapshot: &'a [TickerStats],
    config: &ScreenerConfig,
) -> Vec<&'a TickerStats> {
    snapshot
        .iter()
        .filter(|t| {
            t.symbol.ends_with(&config.quote_suffix)
                && t.volume_24h > 0.0
                && t.quote_volume_24h > config.min_quote_volume
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, volume: f64, quote_volume: f64) -> TickerStats {
        TickerStats {
            symbol: symbol.to_string(),
            last_price: 100.0,
            high_price_24h: 110.0,
            low_price_24h: 90.0,
            price_change_percent_24h: 1.0,
            volume_24h: volume,
            quote_volume_24h: quote_volume,
        }
    }

    #[test]
    fn test_keeps_only_matching_suffix() {
        let snapshot = vec![
            ticker("ABCUSDT", 500.0, 2_000_000.0),
            ticker("XYZBTC", 500.0, 2_000_000.0),
            ticker("DEFUSDT", 500.0, 2_000_000.0),
        ];

        let eligible = filter_eligible(&snapshot, &ScreenerConfig::default());

        assert_eq!(eligible.len(), 2);
        assert!(eligible.iter().all(|t| t.symbol.ends_with("USDT")));
    }

    #[test]
    fn test_wrong_suffix_excluded_regardless_of_volume() {
        let snapshot = vec![ticker("XYZBTC", 1_000_000.0, 900_000_000.0)];

        let eligible = filter_eligible(&snapshot, &ScreenerConfig::default());
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_zero_base_volume_excluded() {
        let snapshot = vec![ticker("ABCUSDT", 0.0, 2_000_000.0)];

        let eligible = filter_eligible(&snapshot, &ScreenerConfig::default());
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_liquidity_gate_is_strict() {
        let snapshot = vec![
            ticker("LOWUSDT", 500.0, 999_999.0),
            ticker("ATUSDT", 500.0, 1_000_000.0),
            ticker("OKUSDT", 500.0, 1_000_001.0),
        ];

        let eligible = filter_eligible(&snapshot, &ScreenerConfig::default());

        // Boundary value sits exactly at the floor and is excluded
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].symbol, "OKUSDT");
    }

    #[test]
    fn test_preserves_input_order() {
        let snapshot = vec![
            ticker("CUSDT", 500.0, 2_000_000.0),
            ticker("AUSDT", 500.0, 2_000_000.0),
            ticker("BUSDT", 500.0, 2_000_000.0),
        ];

        let eligible = filter_eligible(&snapshot, &ScreenerConfig::default());
        let symbols: Vec<&str> = eligible.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["CUSDT", "AUSDT", "BUSDT"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let eligible = filter_eligible(&[], &ScreenerConfig::default());
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_custom_suffix() {
        let config = ScreenerConfig {
            quote_suffix: "BTC".to_string(),
            ..Default::default()
        };
        let snapshot = vec![
            ticker("XYZBTC", 500.0, 2_000_000.0),
            ticker("ABCUSDT", 500.0, 2_000_000.0),
        ];

        let eligible = filter_eligible(&snapshot, &config);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].symbol, "XYZBTC");
    }
}
