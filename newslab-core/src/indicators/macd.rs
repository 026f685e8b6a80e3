//! Moving Average Convergence Divergence.
//!
//! Line: EMA(fast) - EMA(slow) of close. Signal: EMA(signal) of the line.
//! Histogram: line - signal. EMAs seed from the first value, so every
//! series is defined from index 0. The three series are exposed as
//! separate named `Indicator` instances.

use crate::domain::Bar;
use crate::indicators::Indicator;

/// Which MACD series to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdSeries {
    Line,
    Signal,
    Histogram,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
    series: MacdSeries,
    name: String,
}

impl Macd {
    pub fn line(fast: usize, slow: usize, signal: usize) -> Self {
        Self::build(fast, slow, signal, MacdSeries::Line, "macd")
    }

    pub fn signal_line(fast: usize, slow: usize, signal: usize) -> Self {
        Self::build(fast, slow, signal, MacdSeries::Signal, "macd_signal")
    }

    pub fn histogram(fast: usize, slow: usize, signal: usize) -> Self {
        Self::build(fast, slow, signal, MacdSeries::Histogram, "macd_hist")
    }

    /// The conventional 12/26/9 trio of series.
    pub fn standard() -> [Self; 3] {
        [
            Self::line(12, 26, 9),
            Self::signal_line(12, 26, 9),
            Self::histogram(12, 26, 9),
        ]
    }

    fn build(fast: usize, slow: usize, signal: usize, series: MacdSeries, name: &str) -> Self {
        assert!(fast >= 1 && slow >= 1 && signal >= 1, "MACD spans must be >= 1");
        assert!(fast < slow, "MACD fast span must be shorter than slow span");
        Self {
            fast,
            slow,
            signal,
            series,
            name: name.to_string(),
        }
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let fast = ewma_span(&closes, self.fast);
        let slow = ewma_span(&closes, self.slow);
        let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();

        match self.series {
            MacdSeries::Line => line,
            MacdSeries::Signal => ewma_span(&line, self.signal),
            MacdSeries::Histogram => {
                let signal = ewma_span(&line, self.signal);
                line.iter().zip(&signal).map(|(l, s)| l - s).collect()
            }
        }
    }
}

/// Exponentially weighted mean with `alpha = 2 / (span + 1)`, seeded from
/// the first non-NaN value. NaN inputs stay NaN without resetting the
/// running mean.
pub fn ewma_span(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = vec![f64::NAN; values.len()];
    let mut prev: Option<f64> = None;

    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        let next = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        result[i] = next;
        prev = Some(next);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn ewma_seeds_from_first_value() {
        // span=3 → alpha=0.5. Values 10, 12, 14:
        // 10, 0.5*12 + 0.5*10 = 11, 0.5*14 + 0.5*11 = 12.5
        let result = ewma_span(&[10.0, 12.0, 14.0], 3);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert_approx(result[1], 11.0, DEFAULT_EPSILON);
        assert_approx(result[2], 12.5, DEFAULT_EPSILON);
    }

    #[test]
    fn ewma_skips_nan_without_reset() {
        let result = ewma_span(&[10.0, f64::NAN, 14.0], 3);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert!(result[1].is_nan());
        assert_approx(result[2], 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn line_is_fast_minus_slow() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let line = Macd::line(3, 5, 2).compute(&bars);
        let fast = ewma_span(&closes, 3);
        let slow = ewma_span(&closes, 5);
        for i in 0..bars.len() {
            assert_approx(line[i], fast[i] - slow[i], DEFAULT_EPSILON);
        }
        // Rising closes keep the fast EMA above the slow one.
        assert!(line[5] > 0.0);
    }

    #[test]
    fn histogram_is_line_minus_signal() {
        let bars = make_bars(&[10.0, 12.0, 9.0, 13.0, 11.0, 15.0, 14.0]);
        let line = Macd::line(3, 5, 2).compute(&bars);
        let signal = Macd::signal_line(3, 5, 2).compute(&bars);
        let hist = Macd::histogram(3, 5, 2).compute(&bars);
        for i in 0..bars.len() {
            assert_approx(hist[i], line[i] - signal[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn standard_names_match_report_columns() {
        let [line, signal, hist] = Macd::standard();
        assert_eq!(line.name(), "macd");
        assert_eq!(signal.name(), "macd_signal");
        assert_eq!(hist.name(), "macd_hist");
    }

    #[test]
    #[should_panic]
    fn fast_span_must_be_shorter() {
        let _ = Macd::line(26, 12, 9);
    }
}
