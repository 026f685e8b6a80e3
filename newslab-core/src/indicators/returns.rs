//! Daily percent returns of close prices.

use crate::domain::Bar;

/// Simple percent change of close: r[i] = close[i] / close[i-1] - 1.
///
/// Index 0 is NaN. A NaN close on either side of a pair makes that return
/// NaN; a zero previous close makes it infinite, and non-finite returns
/// are dropped by the correlation layer.
pub fn daily_returns(bars: &[Bar]) -> Vec<f64> {
    let mut result = vec![f64::NAN; bars.len()];
    for i in 1..bars.len() {
        let prev = bars[i - 1].close;
        let curr = bars[i].close;
        if prev.is_nan() || curr.is_nan() {
            continue;
        }
        result[i] = curr / prev - 1.0;
    }
    result
}
