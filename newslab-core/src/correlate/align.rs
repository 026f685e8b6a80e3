//! Line up daily sentiment with daily price returns.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::correlate::pearson;
use crate::domain::{Bar, DailySentiment};
use crate::indicators::daily_returns;

/// Which aggregated sentiment column to correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentField {
    Polarity,
    Subjectivity,
}

impl SentimentField {
    pub(crate) fn of(self, row: &DailySentiment) -> f64 {
        match self {
            SentimentField::Polarity => row.avg_polarity,
            SentimentField::Subjectivity => row.avg_subjectivity,
        }
    }
}

/// One price day with its return and (when news landed) its sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub ticker: String,
    pub close: f64,
    /// Simple percent change vs the previous bar of the same ticker.
    /// None on the first bar and wherever the change is non-finite.
    pub daily_return: Option<f64>,
    pub avg_polarity: Option<f64>,
    pub avg_subjectivity: Option<f64>,
    pub article_count: usize,
}

/// Left-join daily sentiment onto price rows by (calendar day, ticker).
///
/// Every price row appears exactly once, in (ticker, date) order; price
/// rows without matching sentiment keep None sentiment fields. Bars with
/// an empty ticker (single-instrument price files) match sentiment by
/// day alone, taking the first ticker reported that day.
pub fn align_sentiment_with_returns(
    sentiment: &[DailySentiment],
    bars: &[Bar],
) -> Vec<AlignedRow> {
    let mut by_day_ticker: BTreeMap<(NaiveDate, &str), &DailySentiment> = BTreeMap::new();
    let mut by_day: BTreeMap<NaiveDate, &DailySentiment> = BTreeMap::new();
    for row in sentiment {
        by_day_ticker.insert((row.date, row.ticker.as_str()), row);
        by_day.entry(row.date).or_insert(row);
    }

    let mut by_ticker: BTreeMap<&str, Vec<&Bar>> = BTreeMap::new();
    for bar in bars {
        by_ticker.entry(bar.ticker.as_str()).or_default().push(bar);
    }

    let mut aligned = Vec::with_capacity(bars.len());
    for (ticker, mut ticker_bars) in by_ticker {
        ticker_bars.sort_by_key(|b| b.date);
        let owned: Vec<Bar> = ticker_bars.iter().map(|&b| b.clone()).collect();
        let returns = daily_returns(&owned);

        for (bar, ret) in owned.iter().zip(returns) {
            let matched = if ticker.is_empty() {
                by_day.get(&bar.date).copied()
            } else {
                by_day_ticker.get(&(bar.date, ticker)).copied()
            };
            aligned.push(AlignedRow {
                date: bar.date,
                ticker: ticker.to_string(),
                close: bar.close,
                daily_return: ret.is_finite().then_some(ret),
                avg_polarity: matched.map(|s| s.avg_polarity),
                avg_subjectivity: matched.map(|s| s.avg_subjectivity),
                article_count: matched.map_or(0, |s| s.article_count),
            });
        }
    }
    aligned
}

/// Pearson correlation between a sentiment column and daily returns
/// across all aligned rows.
pub fn overall_correlation(aligned: &[AlignedRow], field: SentimentField) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in aligned {
        let sentiment = match field {
            SentimentField::Polarity => row.avg_polarity,
            SentimentField::Subjectivity => row.avg_subjectivity,
        };
        if let (Some(s), Some(r)) = (sentiment, row.daily_return) {
            xs.push(s);
            ys.push(r);
        }
    }
    pearson(&xs, &ys)
}
