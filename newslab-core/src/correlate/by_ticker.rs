//! Per-ticker correlation with an optional date shift.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::correlate::align::SentimentField;
use crate::correlate::pearson;
use crate::domain::{Bar, DailySentiment};
use crate::indicators::daily_returns;

/// Correlation result for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerCorrelation {
    pub ticker: String,
    /// None when fewer than two clean pairs exist or variance is zero.
    pub correlation: Option<f64>,
    pub pair_count: usize,
}

/// Correlate sentiment on day d against the return on day d + shift_days,
/// per ticker.
///
/// Shift 0 pairs same-day sentiment and return; shift 1 asks whether
/// today's news tone anticipates tomorrow's move. Output covers every
/// ticker present in the sentiment rows, sorted by ticker; tickers with
/// no price bars report zero pairs.
pub fn correlations_by_ticker(
    sentiment: &[DailySentiment],
    bars: &[Bar],
    field: SentimentField,
    shift_days: i64,
) -> Vec<TickerCorrelation> {
    // Per-ticker map of date → return.
    let mut bars_by_ticker: BTreeMap<&str, Vec<&Bar>> = BTreeMap::new();
    for bar in bars {
        bars_by_ticker.entry(bar.ticker.as_str()).or_default().push(bar);
    }
    let mut returns_by_ticker: BTreeMap<&str, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for (ticker, mut ticker_bars) in bars_by_ticker {
        ticker_bars.sort_by_key(|b| b.date);
        let owned: Vec<Bar> = ticker_bars.iter().map(|&b| b.clone()).collect();
        let returns = daily_returns(&owned);
        let map = owned
            .iter()
            .zip(returns)
            .filter(|(_, r)| r.is_finite())
            .map(|(bar, r)| (bar.date, r))
            .collect();
        returns_by_ticker.insert(ticker, map);
    }

    let mut sentiment_by_ticker: BTreeMap<&str, Vec<&DailySentiment>> = BTreeMap::new();
    for row in sentiment {
        sentiment_by_ticker
            .entry(row.ticker.as_str())
            .or_default()
            .push(row);
    }

    sentiment_by_ticker
        .into_iter()
        .map(|(ticker, rows)| {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            if let Some(returns) = returns_by_ticker.get(ticker) {
                for row in rows {
                    let target = row.date + Duration::days(shift_days);
                    let value = field.of(row);
                    if let Some(&ret) = returns.get(&target) {
                        if value.is_finite() {
                            xs.push(value);
                            ys.push(ret);
                        }
                    }
                }
            }
            let r = pearson(&xs, &ys);
            TickerCorrelation {
                ticker: ticker.to_string(),
                correlation: r.is_finite().then_some(r),
                pair_count: xs.len(),
            }
        })
        .collect()
}
