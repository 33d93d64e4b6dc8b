//! Plain-text table rendering for scan results.

use scanner_core::CoinAnalysis;

/// Format a quantity with a B/M/K magnitude suffix, e.g. 1.53B, 42.10M, 7.25K.
pub fn format_magnitude(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Render the top-N results as an aligned table, or a neutral line when the
/// scan produced nothing.
pub fn render_table(results: &[CoinAnalysis], top_n: usize) -> String {
    if results.is_empty() {
        return "No eligible pairs in this snapshot".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<14} {:>14} {:>9} {:<12} {:>14} {:>9} {:>11} {:>6}\n",
        "#", "SYMBOL", "PRICE", "24H%", "TREND", "TARGET", "PROFIT%", "QUOTE VOL", "SCORE"
    ));

    for (i, r) in results.iter().take(top_n).enumerate() {
        out.push_str(&format!(
            "{:<4} {:<14} {:>14.6} {:>+8.2}% {:<12} {:>14.6} {:>8.2}% {:>11} {:>6}\n",
            i + 1,
            r.symbol,
            r.price,
            r.price_change_percent,
            r.trend.name(),
            r.target_price,
            r.expected_profit_percent,
            format_magnitude(r.quote_volume),
            r.score,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scanner_core::Trend;

    fn analysis(symbol: &str, score: u32) -> CoinAnalysis {
        CoinAnalysis {
            symbol: symbol.to_string(),
            price: 100.0,
            price_change_percent: 6.0,
            quote_volume: 2_000_000.0,
            trend: Trend::StrongUp,
            target_price: 111.11,
            expected_profit_percent: 11.11,
            score,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(1_530_000_000.0), "1.53B");
        assert_eq!(format_magnitude(42_100_000.0), "42.10M");
        assert_eq!(format_magnitude(7_250.0), "7.25K");
        assert_eq!(format_magnitude(999.0), "999.00");
        assert_eq!(format_magnitude(0.0), "0.00");
    }

    #[test]
    fn test_empty_results_render_neutral_line() {
        assert_eq!(render_table(&[], 20), "No eligible pairs in this snapshot");
    }

    #[test]
    fn test_table_truncates_to_top_n() {
        let results = vec![
            analysis("AUSDT", 90),
            analysis("BUSDT", 80),
            analysis("CUSDT", 70),
        ];

        let table = render_table(&results, 2);
        assert!(table.contains("AUSDT"));
        assert!(table.contains("BUSDT"));
        assert!(!table.contains("CUSDT"));
    }
}
