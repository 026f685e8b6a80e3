//! Rolling volatility of daily returns.
//!
//! Sample standard deviation of the trailing `window` daily returns,
//! full windows only. The return series itself starts at index 1, so the
//! first defined value lands at index `window`.

use crate::domain::Bar;
use crate::indicators::returns::daily_returns;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Volatility {
    window: usize,
    name: String,
}

impl Volatility {
    pub fn new(window: usize) -> Self {
        assert!(window >= 2, "volatility window must be >= 2");
        Self {
            window,
            name: format!("volatility_{window}"),
        }
    }
}

impl Indicator for Volatility {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        let returns = daily_returns(bars);

        for i in self.window..n {
            let window = &returns[(i + 1 - self.window)..=i];
            if window.iter().any(|r| !r.is_finite()) {
                continue;
            }

            let mean = window.iter().sum::<f64>() / self.window as f64;
            let variance = window.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>()
                / (self.window - 1) as f64;
            result[i] = variance.sqrt();
        }

        result
    }
}
