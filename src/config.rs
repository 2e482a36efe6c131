use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    DEFAULT_POST_LIMIT, DEFAULT_TELEGRAM_BASE_URL, DEFAULT_TELEGRAM_CHANNEL,
    DEFAULT_YOUTUBE_API_BASE, DEFAULT_YOUTUBE_HANDLE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_channel: String,
    pub telegram_base_url: String,
    pub telegram_post_limit: usize,
    pub telegram_cache_ttl: Duration,

    // YouTube
    pub youtube_api_key: Option<String>,
    pub youtube_channel_id: Option<String>,
    pub youtube_channel_handle: String,
    pub youtube_api_base: String,
    pub youtube_cache_ttl: Duration,

    // Outbound HTTP
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so an empty environment yields a usable
    /// configuration (with the video feed disabled for lack of an API key).
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Telegram
            telegram_channel: env_or_default("TELEGRAM_CHANNEL_USERNAME", DEFAULT_TELEGRAM_CHANNEL),
            telegram_base_url: env_or_default("TELEGRAM_BASE_URL", DEFAULT_TELEGRAM_BASE_URL),
            telegram_post_limit: parse_env_usize("TELEGRAM_POST_LIMIT", DEFAULT_POST_LIMIT)?,
            telegram_cache_ttl: Duration::from_secs(parse_env_u64("TELEGRAM_CACHE_SECS", 1800)?),

            // YouTube
            youtube_api_key: optional_env("YOUTUBE_API_KEY"),
            youtube_channel_id: optional_env("YOUTUBE_CHANNEL_ID"),
            youtube_channel_handle: env_or_default("YOUTUBE_CHANNEL_HANDLE", DEFAULT_YOUTUBE_HANDLE),
            youtube_api_base: env_or_default("YOUTUBE_API_BASE", DEFAULT_YOUTUBE_API_BASE),
            youtube_cache_ttl: Duration::from_secs(parse_env_u64("YOUTUBE_CACHE_SECS", 3600)?),

            // Outbound HTTP
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 10)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Configuration with defaults and no environment lookups, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            telegram_channel: DEFAULT_TELEGRAM_CHANNEL.to_string(),
            telegram_base_url: DEFAULT_TELEGRAM_BASE_URL.to_string(),
            telegram_post_limit: DEFAULT_POST_LIMIT,
            telegram_cache_ttl: Duration::from_secs(1800),
            youtube_api_key: None,
            youtube_channel_id: None,
            youtube_channel_handle: DEFAULT_YOUTUBE_HANDLE.to_string(),
            youtube_api_base: DEFAULT_YOUTUBE_API_BASE.to_string(),
            youtube_cache_ttl: Duration::from_secs(3600),
            http_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 8080,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram_channel.trim_start_matches('@').is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "TELEGRAM_CHANNEL_USERNAME".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if url::Url::parse(&self.telegram_base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "TELEGRAM_BASE_URL".to_string(),
                message: format!("not a valid URL: '{}'", self.telegram_base_url),
            });
        }
        if url::Url::parse(&self.youtube_api_base).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "YOUTUBE_API_BASE".to_string(),
                message: format!("not a valid URL: '{}'", self.youtube_api_base),
            });
        }
        if self.telegram_post_limit > DEFAULT_POST_LIMIT {
            return Err(ConfigError::InvalidValue {
                name: "TELEGRAM_POST_LIMIT".to_string(),
                message: format!("must be at most {DEFAULT_POST_LIMIT}"),
            });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
