use anyhow::Result;

use vitrina_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Config file: {}", AppConfig::config_path().display());
    println!();

    println!("[server]");
    println!("  bind = {}", config.server.bind);
    println!();

    // The token itself is never echoed.
    println!("[telegram]");
    let token = if config.telegram.bot_token.is_some() {
        "(set)"
    } else {
        "(not set)"
    };
    println!("  bot_token = {}", token);
    match config.telegram.chat_id {
        Some(id) => println!("  chat_id = {}", id),
        None => println!("  chat_id = (not set)"),
    }
    println!("  api_base = {}", config.telegram.api_base);
    println!("  request_timeout_secs = {}", config.telegram.request_timeout_secs);
    println!();

    println!("[carousel]");
    println!("  debounce_ms = {}", config.carousel.debounce_ms);
    println!("  settle_ms = {}", config.carousel.settle_ms);
    println!(
        "  initial_center_delay_ms = {}",
        config.carousel.initial_center_delay_ms
    );
    println!("  mobile_breakpoint = {}", config.carousel.mobile_breakpoint);
    println!("  swipe_threshold = {}", config.carousel.swipe_threshold);
    println!("  navigation = {:?}", config.carousel.navigation);

    Ok(())
}
