use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid period: '{0}'. Valid values: 5d, mtd, ytd, 5y, 10y")]
    InvalidPeriod(String),

    #[error("Unknown asset class: '{0}'")]
    UnknownAssetClass(String),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Insufficient data for {symbol}: {points} point(s)")]
    InsufficientData { symbol: String, points: usize },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
