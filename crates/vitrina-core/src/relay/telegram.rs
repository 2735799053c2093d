//! Thin client for the Telegram Bot API
//!
//! Only `sendMessage` is needed: the relay forwards each submission as one
//! plain-text message to a fixed chat.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use url::Url;

use crate::config::TelegramConfig;
use crate::error::{Error, Result};

/// Response envelope shared by all Bot API methods
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Client bound to one bot token and one destination chat
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    api_base: String,
    token: String,
    chat_id: i64,
}

impl TelegramClient {
    /// Build the client from configuration.
    ///
    /// Fails when the token or chat id is missing; there is no baked-in
    /// fallback for either.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let token = config
            .bot_token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config("telegram.bot_token is not set".into()))?;
        let chat_id = config
            .chat_id
            .ok_or_else(|| Error::Config("telegram.chat_id is not set".into()))?;

        Url::parse(&config.api_base)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token,
            chat_id,
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Deliver `text` to the configured chat.
    ///
    /// A reachable API that answers `"ok": false` becomes
    /// [`Error::Telegram`] carrying the API's description; transport
    /// problems surface as [`Error::Http`].
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("sendMessage"))
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?;

        let envelope: ApiEnvelope = response.json().await?;
        if envelope.ok {
            info!("Message delivered to chat {}", self.chat_id);
            Ok(())
        } else {
            let description = envelope
                .description
                .unwrap_or_else(|| "Telegram rejected the message".to_string());
            warn!("Telegram refused sendMessage: {}", description);
            Err(Error::Telegram(description))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(token: Option<&str>, chat_id: Option<i64>) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.map(String::from),
            chat_id,
            ..TelegramConfig::default()
        }
    }

    #[test]
    fn test_missing_token_is_rejected() {
        assert!(matches!(
            TelegramClient::new(&config_with(None, Some(1))),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TelegramClient::new(&config_with(Some(""), Some(1))),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_chat_id_is_rejected() {
        assert!(matches!(
            TelegramClient::new(&config_with(Some("123:abc"), None)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let mut config = config_with(Some("123:abc"), Some(1));
        config.api_base = "not a url".to_string();
        assert!(TelegramClient::new(&config).is_err());
    }

    #[test]
    fn test_endpoint_tolerates_a_trailing_slash() {
        let mut config = config_with(Some("123:abc"), Some(1));
        config.api_base = "https://api.telegram.org/".to_string();
        let client = TelegramClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_envelope_parses_failure_description() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok":false,"error_code":400,"description":"chat not found"}"#)
                .unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.description.as_deref(), Some("chat not found"));

        let envelope: ApiEnvelope = serde_json::from_str(r#"{"ok":true,"result":{}}"#).unwrap();
        assert!(envelope.ok);
        assert!(envelope.description.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_surfaces_a_transport_error() {
        let mut config = config_with(Some("123:abc"), Some(1));
        // Nothing listens on port 1.
        config.api_base = "http://127.0.0.1:1".to_string();
        let client = TelegramClient::new(&config).unwrap();

        let err = client.send_message("hello").await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
