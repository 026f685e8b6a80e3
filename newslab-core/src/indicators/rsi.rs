//! Relative Strength Index over EWMA-smoothed gains and losses.
//!
//! Average gain and average loss are exponentially weighted with
//! `alpha = 1/window`, seeded from the first price change, so the first
//! value lands at index 1. RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! A zero average loss leaves RS undefined and the output NaN.

use crate::domain::Bar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
    name: String,
}

impl Rsi {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "RSI window must be >= 1");
        Self {
            window,
            name: format!("rsi_{window}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < 2 {
            return result;
        }

        let alpha = 1.0 / self.window as f64;
        let mut avg_gain = f64::NAN;
        let mut avg_loss = f64::NAN;

        for i in 1..n {
            let curr = bars[i].close;
            let prev = bars[i - 1].close;
            if curr.is_nan() || prev.is_nan() {
                // A hole in the closes taints everything after it.
                for val in result.iter_mut().skip(i) {
                    *val = f64::NAN;
                }
                return result;
            }

            let change = curr - prev;
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);

            if avg_gain.is_nan() {
                avg_gain = gain;
                avg_loss = loss;
            } else {
                avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
                avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
            }

            result[i] = if avg_loss == 0.0 {
                f64::NAN
            } else {
                100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
            };
        }

        result
    }
}
