use std::sync::Arc;

use support_bot::channels::{CliChannel, chat_routes};
use support_bot::config::{BotConfig, RunMode};
use support_bot::error::Result;
use support_bot::knowledge::{FaqTable, OrderTable};
use support_bot::pipeline::{IntentDetector, Responder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    run().await?;
    Ok(())
}

async fn run() -> Result<()> {
    let config = BotConfig::from_env()?;

    // ── Knowledge tables ────────────────────────────────────────────────
    let faq = match &config.faq_path {
        Some(path) => FaqTable::load(path)?,
        None => FaqTable::default(),
    };
    let orders = match &config.orders_path {
        Some(path) => OrderTable::load(path)?,
        None => OrderTable::default(),
    };

    eprintln!("🤖 Support Bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   FAQ topics: {}", faq.len());
    eprintln!("   Orders: {}", orders.len());

    let responder = Arc::new(Responder::new(
        IntentDetector::default_rules(),
        Arc::new(faq),
        Arc::new(orders),
    ));

    match config.mode {
        RunMode::Cli => {
            eprintln!("   Type a message and press Enter. /quit to exit.\n");
            CliChannel::new(responder).run().await?;
        }
        RunMode::Http => {
            let addr = config.bind_addr();
            eprintln!("   Chat page: http://{}/", addr);
            eprintln!("   Chat API: http://{}/chat\n", addr);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(addr = %addr, "Chat server started");
            axum::serve(listener, chat_routes(responder)).await?;
        }
    }

    Ok(())
}
