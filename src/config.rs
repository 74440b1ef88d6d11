use std::{env, fmt};
use url::Url;
use crate::error::{ScanError, ScanResult};

pub const BINANCE_BASE_URL: &str = "https://api.binance.com";
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Quote asset every scanned pair must be denominated in.
pub const QUOTE_ASSET: &str = "USDT";
pub const KLINE_INTERVAL: &str = "15m";
pub const KLINE_LIMIT: u16 = 100;

/// Leveraged-token markers; any symbol containing one is skipped.
pub const EXCLUDED_PATTERNS: [&str; 4] = ["UP", "DOWN", "BULL", "BEAR"];

#[derive(Clone)]
pub struct ExchangeConfig {
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub base_url: String,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `RUST_LOG`, when set, takes precedence over `level`.
    pub rust_log: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub exchange: ExchangeConfig,
    pub telegram: Option<TelegramConfig>,
    pub logging: LoggingConfig,
}

impl fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig {
                api_key: None,
                secret_key: None,
                base_url: BINANCE_BASE_URL.to_string(),
            },
            telegram: None,
            logging: LoggingConfig {
                level: "info".to_string(),
                rust_log: None,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ScanResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source. Unset and blank
    /// values are treated the same way.
    pub fn from_lookup<F>(lookup: F) -> ScanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_opt = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        config.exchange.api_key = env_opt("BINANCE_API_KEY");
        config.exchange.secret_key = env_opt("BINANCE_SECRET_KEY");

        if let Some(base_url) = env_opt("BINANCE_BASE_URL") {
            config.exchange.base_url = base_url;
        }

        let api_url = env_opt("TELEGRAM_API_URL").unwrap_or_else(|| TELEGRAM_API_URL.to_string());
        config.telegram = match (env_opt("TELEGRAM_BOT_TOKEN"), env_opt("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id, api_url }),
            _ => None,
        };

        if let Some(level) = env_opt("LOG_LEVEL") {
            config.logging.level = level.to_lowercase();
        }
        config.logging.rust_log = env_opt("RUST_LOG");

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ScanResult<()> {
        Url::parse(&self.exchange.base_url).map_err(|e| {
            ScanError::Configuration(format!("Invalid BINANCE_BASE_URL {}: {}", self.exchange.base_url, e))
        })?;

        if let Some(telegram) = &self.telegram {
            Url::parse(&telegram.api_url).map_err(|e| {
                ScanError::Configuration(format!("Invalid TELEGRAM_API_URL {}: {}", telegram.api_url, e))
            })?;
        }

        // LOG_LEVEL is ignored when RUST_LOG is present.
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if self.logging.rust_log.is_none() && !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ScanError::Configuration(format!("Invalid log level: {}", self.logging.level)));
        }

        Ok(())
    }
}
