//! Property tests for the statistics layer.
//!
//! Uses proptest to verify:
//! 1. RSI is NaN or within [0, 100]
//! 2. Pearson is NaN or within [-1, 1], and symmetric in its arguments
//! 3. Bollinger bands stay ordered low <= mid <= high
//! 4. The moving average of a constant series is that constant

use chrono::NaiveDate;
use proptest::prelude::*;

use newslab_core::correlate::pearson;
use newslab_core::domain::Bar;
use newslab_core::indicators::{Bollinger, Indicator, Rsi, Sma};

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            ticker: "TEST".to_string(),
            date: base_date + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: (close - 1.0).max(0.01),
            close,
            volume: 1000.0,
        })
        .collect()
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..500.0_f64, 2..60)
}

proptest! {
    #[test]
    fn rsi_is_bounded_or_nan(closes in arb_closes(), window in 1usize..20) {
        let bars = bars_from_closes(&closes);
        let result = Rsi::new(window).compute(&bars);
        prop_assert_eq!(result.len(), bars.len());
        for &v in &result {
            prop_assert!(v.is_nan() || (0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn pearson_is_bounded_and_symmetric(
        pairs in prop::collection::vec((0.0..100.0_f64, 0.0..100.0_f64), 2..40)
    ) {
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        let r_xy = pearson(&xs, &ys);
        let r_yx = pearson(&ys, &xs);
        if r_xy.is_nan() {
            prop_assert!(r_yx.is_nan());
        } else {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r_xy));
            prop_assert!((r_xy - r_yx).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_bands_stay_ordered(closes in arb_closes(), window in 2usize..10) {
        let bars = bars_from_closes(&closes);
        let high = Bollinger::high(window, 2.0).compute(&bars);
        let mid = Bollinger::middle(window, 2.0).compute(&bars);
        let low = Bollinger::low(window, 2.0).compute(&bars);
        for i in 0..bars.len() {
            if high[i].is_nan() {
                prop_assert!(mid[i].is_nan() && low[i].is_nan());
                continue;
            }
            prop_assert!(low[i] <= mid[i] + 1e-9);
            prop_assert!(mid[i] <= high[i] + 1e-9);
        }
    }

    #[test]
    fn moving_average_of_constant_is_constant(
        value in 1.0..500.0_f64,
        len in 1usize..40,
        window in 1usize..10,
    ) {
        let bars = bars_from_closes(&vec![value; len]);
        let result = Sma::new(window).compute(&bars);
        for &v in &result {
            prop_assert!((v - value).abs() < 1e-9);
        }
    }
}
