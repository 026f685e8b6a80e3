//! Daily sentiment aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average sentiment for one ticker on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub ticker: String,
    pub avg_polarity: f64,
    pub avg_subjectivity: f64,
    pub article_count: usize,
}
