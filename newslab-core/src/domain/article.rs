//! News article rows as loaded from the headline dataset.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single news headline row.
///
/// `date` is `None` when the source timestamp was absent or unparseable;
/// such rows still participate in text analytics but cannot be aggregated
/// into daily sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub date: Option<DateTime<Utc>>,
    pub headline: String,
    pub publisher: String,
    pub url: Option<String>,
    pub stock: Option<String>,
}

impl NewsArticle {
    /// UTC calendar day of publication, when the timestamp parsed.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date_naive())
    }
}
