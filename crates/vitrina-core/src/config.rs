use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::carousel::CarouselConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            telegram: TelegramConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Relay bind address (host:port)
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token; must be provided at runtime, there is no built-in value
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Chat that receives the forwarded submissions
    #[serde(default)]
    pub chat_id: Option<i64>,
    /// Bot API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base: default_api_base(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file or return defaults, then apply
    /// environment overrides
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };

        Ok(config.apply_env())
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrina/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrina")
            .join("config.toml")
    }

    /// Apply environment variable overrides on top of the file values.
    /// `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID` and `PORT` match the
    /// variables hosting platforms conventionally inject; the
    /// `VITRINA_*` ones are specific to this deployment.
    fn apply_env(mut self) -> Self {
        if let Ok(v) = std::env::var("TELEGRAM_BOT_TOKEN") {
            if !v.is_empty() {
                self.telegram.bot_token = Some(v);
            }
        }
        if let Ok(v) = std::env::var("TELEGRAM_CHAT_ID") {
            match v.trim().parse() {
                Ok(id) => self.telegram.chat_id = Some(id),
                Err(_) => tracing::warn!("Ignoring non-numeric TELEGRAM_CHAT_ID: {}", v),
            }
        }
        if let Ok(v) = std::env::var("VITRINA_TELEGRAM_API") {
            if !v.is_empty() {
                self.telegram.api_base = v;
            }
        }
        if let Ok(v) = std::env::var("VITRINA_BIND") {
            self.server.bind = v;
        } else if let Ok(v) = std::env::var("PORT") {
            match v.trim().parse::<u16>() {
                Ok(port) => self.server.bind = format!("0.0.0.0:{}", port),
                Err(_) => tracing::warn!("Ignoring non-numeric PORT: {}", v),
            }
        }
        self
    }
}
