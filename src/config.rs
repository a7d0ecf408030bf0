//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// How the bot talks to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// JSON chat endpoint plus the static chat page.
    Http,
    /// stdin/stdout REPL for local testing.
    Cli,
}

impl std::str::FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "cli" => Ok(Self::Cli),
            other => Err(ConfigError::InvalidValue {
                key: "SUPPORT_BOT_MODE".to_string(),
                message: format!("expected 'http' or 'cli', got '{other}'"),
            }),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub mode: RunMode,
    pub host: String,
    pub port: u16,
    /// JSON file with FAQ answers (built-in table when unset).
    pub faq_path: Option<PathBuf>,
    /// JSON file with order statuses (built-in table when unset).
    pub orders_path: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Http,
            host: "127.0.0.1".to_string(),
            port: 5000,
            faq_path: None,
            orders_path: None,
        }
    }
}

impl BotConfig {
    /// Build from `SUPPORT_BOT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mode = match lookup("SUPPORT_BOT_MODE") {
            Some(raw) => raw.parse()?,
            None => defaults.mode,
        };

        let port = match lookup("SUPPORT_BOT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "SUPPORT_BOT_PORT".to_string(),
                    message: e.to_string(),
                })?,
            None => defaults.port,
        };

        let host = lookup("SUPPORT_BOT_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Ok(Self {
            mode,
            host,
            port,
            faq_path: path("SUPPORT_BOT_FAQ_PATH"),
            orders_path: path("SUPPORT_BOT_ORDERS_PATH"),
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
