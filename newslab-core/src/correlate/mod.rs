//! Sentiment/return alignment and correlation.

pub mod align;
pub mod by_ticker;
pub mod pearson;

pub use align::{align_sentiment_with_returns, overall_correlation, AlignedRow, SentimentField};
pub use by_ticker::{correlations_by_ticker, TickerCorrelation};
pub use pearson::pearson;
