use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Binance API error {code}: {msg}")]
    ExchangeApi { code: i64, msg: String },

    #[error("Unexpected HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("Invalid market data: {0}")]
    InvalidMarketData(String),

    #[error("Not enough candles: need {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScanError::Network(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            ScanError::Network(format!("Connection error: {}", err))
        } else if err.is_decode() {
            ScanError::InvalidMarketData(format!("Response decoding error: {}", err))
        } else {
            ScanError::Network(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::InvalidMarketData(format!("JSON parsing error: {}", err))
    }
}

impl From<std::num::ParseFloatError> for ScanError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ScanError::InvalidMarketData(format!("Number parsing error: {}", err))
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

impl ScanError {
    /// Too-short series are an expected outcome, not a failure of the data source.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ScanError::InsufficientData { .. })
    }

    pub fn is_exchange_api(&self) -> bool {
        matches!(self, ScanError::ExchangeApi { .. })
    }
}
