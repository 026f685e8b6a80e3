//! Moving average with partial windows.
//!
//! Mean of the trailing `window` closes. Prefixes shorter than the window
//! are averaged as-is, so the series starts at the first bar with no
//! warmup NaNs. A NaN close anywhere in the window makes that value NaN.

use crate::domain::Bar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
    name: String,
}

impl Sma {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "moving average window must be >= 1");
        Self {
            window,
            name: format!("ma_{window}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        for i in 0..n {
            let start = (i + 1).saturating_sub(self.window);
            let window = &bars[start..=i];

            let mut sum = 0.0;
            let mut has_nan = false;
            for bar in window {
                if bar.close.is_nan() {
                    has_nan = true;
                    break;
                }
                sum += bar.close;
            }

            if !has_nan {
                result[i] = sum / window.len() as f64;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn partial_windows_average_the_prefix() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let ma = Sma::new(3);
        let result = ma.compute(&bars);

        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert_approx(result[1], 10.5, DEFAULT_EPSILON);
        // Full windows from index 2
        assert_approx(result[2], 11.0, DEFAULT_EPSILON);
        assert_approx(result[5], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn window_1_is_close() {
        let bars = make_bars(&[100.0, 200.0, 300.0]);
        let result = Sma::new(1).compute(&bars);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn nan_close_taints_overlapping_windows_only() {
        let mut bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        bars[1].close = f64::NAN;
        let result = Sma::new(2).compute(&bars);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert_approx(result[3], 12.5, DEFAULT_EPSILON);
    }

    #[test]
    fn series_name_carries_the_window() {
        assert_eq!(Sma::new(5).name(), "ma_5");
    }
}
