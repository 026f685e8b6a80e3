//! NewsLab Core — news/price loading, sentiment scoring, indicators, correlation.
//!
//! This crate contains the analysis building blocks:
//! - Domain types (news articles, OHLCV bars, daily sentiment aggregates)
//! - CSV loading with required-column validation
//! - Technical indicators (moving average, RSI, MACD, Bollinger, volatility)
//! - Headline sentiment scoring (lexicon and VADER) and daily aggregation
//! - Text analytics (length stats, publishers, TF-IDF, LDA topics)
//! - Sentiment/return alignment and Pearson correlation

pub mod correlate;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod sentiment;
pub mod text;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: analysis result types are Send + Sync so a
    /// caller may fan reports out to worker threads without retrofits.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::NewsArticle>();
        require_sync::<domain::NewsArticle>();
        require_send::<domain::DailySentiment>();
        require_sync::<domain::DailySentiment>();

        require_send::<sentiment::ScoredArticle>();
        require_sync::<sentiment::ScoredArticle>();
        require_send::<sentiment::VaderScores>();
        require_sync::<sentiment::VaderScores>();

        require_send::<correlate::AlignedRow>();
        require_sync::<correlate::AlignedRow>();
        require_send::<correlate::TickerCorrelation>();
        require_sync::<correlate::TickerCorrelation>();

        require_send::<text::HeadlineLengthStats>();
        require_sync::<text::HeadlineLengthStats>();
        require_send::<text::PhraseScore>();
        require_sync::<text::PhraseScore>();
    }
}
