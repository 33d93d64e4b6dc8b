use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Bad ticker {symbol}: {reason}")]
    BadTicker { symbol: String, reason: String },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
