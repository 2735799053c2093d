use std::sync::Arc;

use anyhow::Result;

use vitrina_core::AppConfig;
use vitrina_server::AppState;

pub async fn run(config: &AppConfig, bind: Option<&str>) -> Result<()> {
    let relay = super::telegram_client(config)?;

    let bind = bind.unwrap_or(&config.server.bind);
    println!("Starting the contact relay on {}", bind);
    println!("Submissions endpoint: POST /send-message");

    let state = Arc::new(AppState { relay });
    vitrina_server::serve(bind, state).await?;

    Ok(())
}
