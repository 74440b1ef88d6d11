use serde::Deserialize;
use crate::error::{ScanError, ScanResult};

/// One fifteen-minute kline, oldest-first within a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
    pub quote_asset_volume: f64,
    pub number_of_trades: u64,
    pub taker_buy_base_volume: f64,
    pub taker_buy_quote_volume: f64,
}

/// A kline row exactly as `/api/v3/klines` returns it: twelve positional
/// fields, decimals encoded as strings.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub i64,
    pub String,
    pub u64,
    pub String,
    pub String,
    pub serde_json::Value,
);

impl TryFrom<RawKline> for Candle {
    type Error = ScanError;

    fn try_from(raw: RawKline) -> ScanResult<Self> {
        Ok(Candle {
            open_time: raw.0,
            open: raw.1.parse()?,
            high: raw.2.parse()?,
            low: raw.3.parse()?,
            close: raw.4.parse()?,
            volume: raw.5.parse()?,
            close_time: raw.6,
            quote_asset_volume: raw.7.parse()?,
            number_of_trades: raw.8,
            taker_buy_base_volume: raw.9.parse()?,
            taker_buy_quote_volume: raw.10.parse()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub quote_asset: String,
    #[serde(default)]
    pub is_spot_trading_allowed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

/// Body Binance sends alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// A pair that met the breakout condition, with the values that were compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub symbol: String,
    pub close: f64,
    pub volume: f64,
    pub ema: f64,
    pub avg_volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub symbols: usize,
    pub evaluated: usize,
    pub failed: usize,
    pub signals: usize,
    pub notified: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binance_kline_row() {
        let row = r#"[1499040000000,"0.01634790","0.80000000","0.01575800","0.01577100",
            "148976.11427815",1499644799999,"2434.19055334",308,"1756.87402397",
            "28.46694368","0"]"#;
        let raw: RawKline = serde_json::from_str(row).unwrap();
        let candle = Candle::try_from(raw).unwrap();

        assert_eq!(candle.open_time, 1499040000000);
        assert_eq!(candle.close, 0.01577100);
        assert_eq!(candle.volume, 148976.11427815);
        assert_eq!(candle.number_of_trades, 308);
        assert_eq!(candle.close_time, 1499644799999);
    }

    #[test]
    fn bad_decimal_is_invalid_market_data() {
        let row = r#"[1,"1.0","1.0","1.0","abc","1.0",2,"1.0",3,"1.0","1.0","0"]"#;
        let raw: RawKline = serde_json::from_str(row).unwrap();
        assert!(matches!(Candle::try_from(raw), Err(ScanError::InvalidMarketData(_))));
    }

    #[test]
    fn missing_spot_flag_defaults_to_false() {
        let json = r#"{"symbol":"BTCUSDT","status":"TRADING","quoteAsset":"USDT"}"#;
        let info: SymbolInfo = serde_json::from_str(json).unwrap();
        assert!(!info.is_spot_trading_allowed);
    }
}
