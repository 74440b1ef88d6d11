use crate::data::{Candle, Signal};
use crate::error::{ScanError, ScanResult};
use crate::indicators::TechnicalIndicators;

/// Close above a long EMA on a volume spike.
#[derive(Debug, Clone)]
pub struct VolumeBreakout {
    pub ema_span: usize,
    pub volume_window: usize,
    pub volume_factor: f64,
}

impl Default for VolumeBreakout {
    fn default() -> Self {
        Self {
            ema_span: 99,
            volume_window: 10,
            volume_factor: 1.1,
        }
    }
}

impl VolumeBreakout {
    /// Current candle plus a full trailing volume window.
    pub fn min_candles(&self) -> usize {
        self.volume_window + 1
    }

    /// `Ok(None)` means the series was evaluated and did not match.
    pub fn analyze(&self, symbol: &str, candles: &[Candle]) -> ScanResult<Option<Signal>> {
        if candles.len() < self.min_candles() {
            return Err(ScanError::InsufficientData {
                needed: self.min_candles(),
                got: candles.len(),
            });
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();

        let ema = TechnicalIndicators::calculate_ewm(&closes, self.ema_span);
        let last = candles.len() - 1;

        // The window stops one short of the current candle.
        let window = &volumes[last - self.volume_window..last];
        let avg_volume = TechnicalIndicators::mean(window).ok_or(ScanError::InsufficientData {
            needed: self.min_candles(),
            got: candles.len(),
        })?;

        let close = closes[last];
        let volume = volumes[last];
        let current_ema = ema[last];

        if close > current_ema && volume > avg_volume * self.volume_factor {
            return Ok(Some(Signal {
                symbol: symbol.to_string(),
                close,
                volume,
                ema: current_ema,
                avg_volume,
            }));
        }

        Ok(None)
    }
}
