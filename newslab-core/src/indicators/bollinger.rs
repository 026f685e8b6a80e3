//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! Three bands (separate Indicator instances):
//! - Middle: rolling mean of close over the window
//! - High: middle + mult * stddev(close, window)
//! - Low: middle - mult * stddev(close, window)
//!
//! Full windows only, sample stddev (divide by N-1). Lookback: window - 1.

use crate::domain::Bar;
use crate::indicators::Indicator;

/// Which Bollinger band to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    High,
    Middle,
    Low,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    window: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn high(window: usize, multiplier: f64) -> Self {
        Self::build(window, multiplier, BollingerBand::High, "bb_high")
    }

    pub fn middle(window: usize, multiplier: f64) -> Self {
        Self::build(window, multiplier, BollingerBand::Middle, "bb_mid")
    }

    pub fn low(window: usize, multiplier: f64) -> Self {
        Self::build(window, multiplier, BollingerBand::Low, "bb_low")
    }

    /// All three bands for one window/multiplier pair.
    pub fn bands(window: usize, multiplier: f64) -> [Self; 3] {
        [
            Self::high(window, multiplier),
            Self::middle(window, multiplier),
            Self::low(window, multiplier),
        ]
    }

    fn build(window: usize, multiplier: f64, band: BollingerBand, prefix: &str) -> Self {
        assert!(window >= 2, "Bollinger window must be >= 2");
        assert!(multiplier > 0.0, "Bollinger multiplier must be positive");
        Self {
            window,
            multiplier,
            band,
            name: format!("{prefix}_{window}"),
        }
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.window {
            return result;
        }

        for i in (self.window - 1)..n {
            let window = &bars[(i + 1 - self.window)..=i];

            let mut sum = 0.0;
            let mut has_nan = false;
            for bar in window {
                if bar.close.is_nan() {
                    has_nan = true;
                    break;
                }
                sum += bar.close;
            }
            if has_nan {
                continue;
            }

            let mean = sum / self.window as f64;
            result[i] = match self.band {
                BollingerBand::Middle => mean,
                BollingerBand::High | BollingerBand::Low => {
                    // Sample stddev
                    let variance: f64 = window
                        .iter()
                        .map(|bar| {
                            let diff = bar.close - mean;
                            diff * diff
                        })
                        .sum::<f64>()
                        / (self.window - 1) as f64;
                    let stddev = variance.sqrt();

                    match self.band {
                        BollingerBand::High => mean + self.multiplier * stddev,
                        BollingerBand::Low => mean - self.multiplier * stddev,
                        BollingerBand::Middle => unreachable!(),
                    }
                }
            };
        }

        result
    }
}
