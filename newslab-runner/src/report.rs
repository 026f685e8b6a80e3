//! Versioned analysis report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use newslab_core::correlate::{AlignedRow, TickerCorrelation};
use newslab_core::domain::DailySentiment;
use newslab_core::text::{DailyCount, DomainCount, HeadlineLengthStats, PhraseScore, PublisherCount};

use crate::config::RunId;

/// Bump when the report shape changes; `import_json` rejects newer versions.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema_version: u32,
    /// Hash of the configuration that produced this report.
    pub run_id: RunId,

    pub news_rows: usize,
    pub price_rows: usize,
    /// Tickers seen in the price data, sorted.
    pub tickers: Vec<String>,

    /// None when the news dataset is empty.
    pub headline_stats: Option<HeadlineLengthStats>,
    pub top_publishers: Vec<PublisherCount>,
    pub top_domains: Vec<DomainCount>,
    /// Most recent days of article volume.
    pub daily_articles_tail: Vec<DailyCount>,
    pub top_phrases: Vec<PhraseScore>,
    /// Top words per LDA topic.
    pub topics: Vec<Vec<String>>,

    pub daily_sentiment: Vec<DailySentiment>,
    pub aligned: Vec<AlignedRow>,

    /// Same-day Pearson correlation between avg polarity and returns,
    /// across all tickers. None when undefined.
    pub overall_correlation: Option<f64>,
    /// Shift applied to the per-ticker correlations below.
    pub sentiment_shift_days: i64,
    pub correlations_by_ticker: Vec<TickerCorrelation>,

    /// Final finite indicator values per ticker: ticker → name → value.
    pub indicator_snapshot: BTreeMap<String, BTreeMap<String, f64>>,
}
