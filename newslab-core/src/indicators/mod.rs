//! Technical indicator layer.
//!
//! Indicators are pure functions: bar history in, numeric series out.
//! Each series has the same length as the input bars, with `f64::NAN`
//! wherever the value is undefined (warmup, zero-loss RSI, short windows).
//! They are precomputed once per ticker and collected into an
//! `IndicatorSet` keyed by series name.

pub mod bollinger;
pub mod macd;
pub mod returns;
pub mod rsi;
pub mod sma;
pub mod volatility;

pub use bollinger::{Bollinger, BollingerBand};
pub use macd::{Macd, MacdSeries};
pub use returns::daily_returns;
pub use rsi::Rsi;
pub use sma::Sma;
pub use volatility::Volatility;

use std::collections::HashMap;

use crate::domain::Bar;

/// Trait for indicators.
///
/// Indicators take a full bar series and produce a numeric output series
/// of the same length. Values the indicator cannot define are `f64::NAN`.
/// No value at bar t may depend on data from bar t+1 or later.
pub trait Indicator: Send + Sync {
    /// Series name (e.g., "ma_5", "rsi_14", "macd_signal").
    fn name(&self) -> &str;

    /// Number of leading bars that are always NaN.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Container for precomputed indicator series, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSet {
    series: HashMap<String, Vec<f64>>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every indicator in `indicators` over `bars`.
    pub fn precompute(indicators: &[Box<dyn Indicator>], bars: &[Bar]) -> Self {
        let mut set = Self::new();
        for ind in indicators {
            set.insert(ind.name(), ind.compute(bars));
        }
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(name.into(), values);
    }

    /// Value of a named series at a bar index.
    pub fn get(&self, name: &str, bar_index: usize) -> Option<f64> {
        self.series
            .get(name)
            .and_then(|v| v.get(bar_index).copied())
    }

    pub fn get_series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(|v| v.as_slice())
    }

    /// Final value of a named series, when it exists and is finite.
    pub fn last_finite(&self, name: &str) -> Option<f64> {
        self.series
            .get(name)
            .and_then(|v| v.last().copied())
            .filter(|v| v.is_finite())
    }

    /// Iterate (name, series) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Bar {
                ticker: "TEST".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
