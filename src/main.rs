use anyhow::Context;
use ema_scanner::config::AppConfig;
use ema_scanner::engine::Scanner;
use ema_scanner::notifier::{DisabledNotifier, Notify, TelegramNotifier};
use ema_scanner::rest_client::BinanceClient;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.logging.level);

    let client = BinanceClient::new(&config.exchange);
    let notifier: Box<dyn Notify + Send + Sync> = match config.telegram.clone() {
        Some(cfg) => Box::new(TelegramNotifier::new(cfg)),
        None => {
            warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, signals will only be logged");
            Box::new(DisabledNotifier)
        }
    };

    // One pass per process; scheduling is left to whatever launches us.
    Scanner::new(client, notifier).run().await;
    Ok(())
}
