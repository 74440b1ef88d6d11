use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};
use crate::config::TelegramConfig;
use crate::data::Signal;
use crate::error::{ScanError, ScanResult};

#[async_trait]
pub trait Notify {
    async fn send(&self, text: &str) -> ScanResult<()>;
}

pub fn format_signal(signal: &Signal) -> String {
    format!(
        "📈 Signal for {}\nPrice: {:.4}\nEMA 99: {:.4}\nVolume: {:.2}\nAvg Volume (10): {:.2}",
        signal.symbol, signal.close, signal.ema, signal.volume, signal.avg_volume
    )
}

#[derive(Debug, Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramNotifier {
    http: Client,
    cfg: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(cfg: TelegramConfig) -> Self {
        Self {
            http: Client::new(),
            cfg,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.cfg.api_url.trim_end_matches('/'),
            self.cfg.bot_token
        )
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    /// One attempt, no retry.
    async fn send(&self, text: &str) -> ScanResult<()> {
        let form = [("chat_id", self.cfg.chat_id.as_str()), ("text", text)];
        let response = self
            .http
            .post(self.endpoint())
            .form(&form)
            .send()
            .await
            .map_err(|e| ScanError::Notification(format!("Telegram request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ScanError::Notification(format!("Failed to read Telegram reply ({}): {}", status, e.without_url()))
        })?;
        let reply = serde_json::from_str::<TelegramReply>(&body).ok();

        match reply {
            Some(TelegramReply { ok: true, .. }) if status.is_success() => {
                debug!("Telegram message delivered to chat {}", self.cfg.chat_id);
                Ok(())
            }
            Some(TelegramReply { description: Some(desc), .. }) => Err(ScanError::Notification(format!(
                "Telegram rejected message ({}): {}",
                status, desc
            ))),
            _ => Err(ScanError::Notification(format!(
                "Invalid response received from Telegram ({}): {}",
                status, body
            ))),
        }
    }
}

/// Stand-in used when no bot credentials are configured.
pub struct DisabledNotifier;

#[async_trait]
impl Notify for DisabledNotifier {
    async fn send(&self, _text: &str) -> ScanResult<()> {
        info!("Telegram not configured, message not sent");
        Ok(())
    }
}

#[async_trait]
impl<N: Notify + Send + Sync + ?Sized> Notify for Box<N> {
    async fn send(&self, text: &str) -> ScanResult<()> {
        (**self).send(text).await
    }
}
