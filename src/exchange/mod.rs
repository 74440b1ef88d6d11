use async_trait::async_trait;
use tracing::{error, info};
use crate::config::{EXCLUDED_PATTERNS, QUOTE_ASSET};
use crate::data::{Candle, ExchangeInfo};
use crate::error::ScanResult;

#[async_trait]
pub trait MarketData {
    async fn exchange_info(&self) -> ScanResult<ExchangeInfo>;
    async fn klines(&self, symbol: &str, interval: &str, limit: u16) -> ScanResult<Vec<Candle>>;
}

/// Actively trading spot pairs quoted in `quote`, in exchange order, with
/// leveraged-token names removed.
pub fn filter_spot_pairs(info: &ExchangeInfo, quote: &str) -> Vec<String> {
    info.symbols
        .iter()
        .filter(|s| s.quote_asset == quote)
        .filter(|s| s.status == "TRADING")
        .filter(|s| s.is_spot_trading_allowed)
        .filter(|s| !EXCLUDED_PATTERNS.iter().any(|p| s.symbol.contains(p)))
        .map(|s| s.symbol.clone())
        .collect()
}

/// Never fails: a metadata error is logged and yields no symbols.
pub async fn list_spot_pairs<C: MarketData + ?Sized>(client: &C) -> Vec<String> {
    match client.exchange_info().await {
        Ok(info) => {
            let symbols = filter_spot_pairs(&info, QUOTE_ASSET);
            info!("{} of {} symbols eligible for scanning", symbols.len(), info.symbols.len());
            symbols
        }
        Err(e) => {
            error!("Error fetching symbols: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SymbolInfo;

    fn symbol(name: &str, quote: &str, status: &str, spot: bool) -> SymbolInfo {
        SymbolInfo {
            symbol: name.into(),
            status: status.into(),
            quote_asset: quote.into(),
            is_spot_trading_allowed: spot,
        }
    }

    #[test]
    fn filters_quote_status_spot_and_leveraged_names() {
        let info = ExchangeInfo {
            symbols: vec![
                symbol("BTCUSDT", "USDT", "TRADING", true),
                symbol("BTCUPUSDT", "USDT", "TRADING", true),
                symbol("ETHBUSD", "BUSD", "TRADING", true),
                symbol("XRPBEARUSDT", "USDT", "TRADING", true),
                symbol("EOSBULLUSDT", "USDT", "TRADING", true),
                symbol("ADADOWNUSDT", "USDT", "TRADING", true),
                symbol("LUNAUSDT", "USDT", "BREAK", true),
                symbol("MARGINUSDT", "USDT", "TRADING", false),
                symbol("ETHUSDT", "USDT", "TRADING", true),
            ],
        };

        assert_eq!(filter_spot_pairs(&info, "USDT"), vec!["BTCUSDT", "ETHUSDT"]);
    }

    #[test]
    fn pattern_match_is_plain_substring() {
        let info = ExchangeInfo {
            symbols: vec![symbol("SUPERUSDT", "USDT", "TRADING", true)],
        };
        assert!(filter_spot_pairs(&info, "USDT").is_empty());
    }
}
