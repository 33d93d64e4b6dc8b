//! Market Screener Engine
//!
//! Filters a 24h ticker snapshot down to liquid quote-currency pairs, then
//! scores each one into a ranked recommendation list with a projected target
//! price. Pure batch transform: one snapshot in, one ranked list out, no
//! state carried between calls.

pub mod filter;
pub mod scorer;

pub use filter::filter_eligible;
pub use scorer::{classify_trend, normalize, Screener};
