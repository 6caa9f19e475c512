// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::time::Duration;

/// Default location of the activities API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// How long a signup message stays visible.
pub const DEFAULT_MESSAGE_HIDE_MS: u64 = 5000;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API (no trailing slash needed)
    pub api_url: String,
    /// Delay before a signup message is hidden again
    pub message_hide_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            message_hide_delay: Duration::from_millis(DEFAULT_MESSAGE_HIDE_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("ACTIVITY_BOARD_API_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if api_url.is_empty() {
            return Err(ConfigError::Invalid {
                name: "ACTIVITY_BOARD_API_URL",
                value: api_url,
            });
        }

        let message_hide_delay = match env::var("ACTIVITY_BOARD_MESSAGE_HIDE_MS") {
            Ok(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                    name: "ACTIVITY_BOARD_MESSAGE_HIDE_MS",
                    value: raw.clone(),
                })?;
                Duration::from_millis(millis)
            }
            Err(_) => Duration::from_millis(DEFAULT_MESSAGE_HIDE_MS),
        };

        Ok(Self {
            api_url,
            message_hide_delay,
        })
    }

    /// Replace the API URL, e.g. from a command line flag.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
