use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    #[error("no intraday bars available for {symbol}")]
    NoIntradayData { symbol: String },

    #[error("market data provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SentinelError>;
