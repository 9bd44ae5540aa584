use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Homework status endpoint of the Practicum API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Pause between two poll cycles, in seconds.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Upper bound for a single outbound HTTP request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded once at startup from environment variables.
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// OAuth token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Fixed delay between poll cycles in seconds (default: 600)
    pub retry_period_secs: u64,

    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. All missing required variables are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let practicum_token = get("PRACTICUM_TOKEN");
        let telegram_token = get("TELEGRAM_TOKEN");
        let telegram_chat_id = get("TELEGRAM_CHAT_ID");

        let missing: Vec<&'static str> = [
            ("PRACTICUM_TOKEN", practicum_token.is_none()),
            ("TELEGRAM_TOKEN", telegram_token.is_none()),
            ("TELEGRAM_CHAT_ID", telegram_chat_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token, telegram_token, telegram_chat_id)
        else {
            return Err(ConfigError::Missing(missing));
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period_secs: parse_u64(
                "RETRY_PERIOD_SECS",
                get("RETRY_PERIOD_SECS"),
                DEFAULT_RETRY_PERIOD_SECS,
            )?,
            request_timeout_secs: parse_u64(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period_secs", &self.retry_period_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn parse_u64(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
