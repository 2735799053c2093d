use anyhow::Result;
use chrono::Utc;

use vitrina_core::{AppConfig, Submission};

pub async fn run(
    config: &AppConfig,
    name: Option<String>,
    phone: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let relay = super::telegram_client(config)?;

    let submission = Submission {
        name,
        phone,
        message,
    };

    println!("Sending a test notification...");
    relay.send_message(&submission.to_text(Utc::now())).await?;
    println!("Message sent.");

    Ok(())
}
