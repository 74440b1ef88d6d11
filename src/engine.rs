use chrono::Local;
use tracing::{debug, error, info, warn};
use crate::config::{KLINE_INTERVAL, KLINE_LIMIT};
use crate::data::{ScanSummary, Signal};
use crate::error::ScanResult;
use crate::exchange::{list_spot_pairs, MarketData};
use crate::notifier::{format_signal, Notify};
use crate::signal::VolumeBreakout;

/// One pass over every eligible pair, strictly one symbol at a time.
pub struct Scanner<C: MarketData, N: Notify> {
    pub client: C,
    pub notifier: N,
    pub strategy: VolumeBreakout,
}

impl<C: MarketData, N: Notify> Scanner<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            strategy: VolumeBreakout::default(),
        }
    }

    pub async fn evaluate_symbol(&self, symbol: &str) -> ScanResult<Option<Signal>> {
        let candles = self.client.klines(symbol, KLINE_INTERVAL, KLINE_LIMIT).await?;
        self.strategy.analyze(symbol, &candles)
    }

    /// Runs the scan to completion. Per-symbol and notification failures are
    /// logged and counted, never returned.
    pub async fn run(&self) -> ScanSummary {
        info!("Scanning market at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

        let symbols = list_spot_pairs(&self.client).await;
        let mut summary = ScanSummary {
            symbols: symbols.len(),
            ..ScanSummary::default()
        };

        for symbol in &symbols {
            let signal = match self.evaluate_symbol(symbol).await {
                Ok(signal) => {
                    summary.evaluated += 1;
                    signal
                }
                Err(e) if e.is_insufficient_data() => {
                    summary.evaluated += 1;
                    debug!("Skipping {}: {}", symbol, e);
                    None
                }
                Err(e) if e.is_exchange_api() => {
                    summary.failed += 1;
                    warn!("Binance API error for {}: {}", symbol, e);
                    None
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!("Error processing {}: {}", symbol, e);
                    None
                }
            };

            let Some(signal) = signal else { continue };
            summary.signals += 1;

            let msg = format_signal(&signal);
            info!("{}", msg);

            match self.notifier.send(&msg).await {
                Ok(()) => summary.notified += 1,
                Err(e) => error!("Telegram error for {}: {}", symbol, e),
            }
        }

        info!(
            "Scan complete: {} symbols, {} evaluated, {} failed, {} signals, {} notified",
            summary.symbols, summary.evaluated, summary.failed, summary.signals, summary.notified
        );
        summary
    }
}
