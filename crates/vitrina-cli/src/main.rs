use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrina_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about = "Landing page relay and tooling for the Vitrina site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the contact-form relay server
    Serve {
        /// Listen address, e.g. 0.0.0.0:3000
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Send a test notification through the configured bot
    Send {
        /// Name to put in the notification
        #[arg(short, long)]
        name: Option<String>,
        /// Phone number to put in the notification
        #[arg(short, long)]
        phone: Option<String>,
        /// Free-form message text
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from a local .env participate in the overrides below
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Serve { bind } => commands::serve::run(&config, bind.as_deref()).await,
        Commands::Send {
            name,
            phone,
            message,
        } => commands::send::run(&config, name, phone, message).await,
        Commands::Config => commands::config::run(&config),
    }
}
