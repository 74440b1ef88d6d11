use crate::config::ExchangeConfig;
use crate::data::{ApiErrorBody, Candle, ExchangeInfo, RawKline};
use crate::error::{ScanError, ScanResult};
use crate::exchange::MarketData;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

pub struct BinanceClient {
    pub client: Client,
    pub base_url: String,
    api_key: Option<String>,
}

impl BinanceClient {
    pub fn new(cfg: &ExchangeConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ScanResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);

        if let Some(key) = &self.api_key {
            request = request.header("X-MBX-APIKEY", key);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ScanResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => ScanError::ExchangeApi { code: err.code, msg: err.msg },
                Err(_) => ScanError::Http { status: status.as_u16(), body },
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MarketData for BinanceClient {
    async fn exchange_info(&self) -> ScanResult<ExchangeInfo> {
        debug!("Fetching exchange info from {}", self.base_url);
        self.get("/api/v3/exchangeInfo", &[]).await
    }

    async fn klines(&self, symbol: &str, interval: &str, limit: u16) -> ScanResult<Vec<Candle>> {
        let query = [
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        let rows: Vec<RawKline> = self.get("/api/v3/klines", &query).await?;
        rows.into_iter().map(Candle::try_from).collect()
    }
}
