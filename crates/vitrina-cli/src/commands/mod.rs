use anyhow::{Context, Result};

use vitrina_core::{AppConfig, TelegramClient};

pub mod config;
pub mod send;
pub mod serve;

/// Build the Telegram client, or explain how to configure it
fn telegram_client(config: &AppConfig) -> Result<TelegramClient> {
    TelegramClient::new(&config.telegram).context(
        "Telegram credentials are missing; set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID, \
         or fill in the [telegram] section of the config file",
    )
}
