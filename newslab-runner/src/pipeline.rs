//! The analysis pipeline: load → score → aggregate → enrich → align →
//! correlate → report.

use std::collections::BTreeMap;

use thiserror::Error;

use newslab_core::correlate::{
    align_sentiment_with_returns, correlations_by_ticker, overall_correlation, SentimentField,
};
use newslab_core::data::{load_news_csv, load_prices_csv, DataError};
use newslab_core::domain::{Bar, NewsArticle};
use newslab_core::indicators::{Bollinger, Indicator, IndicatorSet, Macd, Rsi, Sma, Volatility};
use newslab_core::sentiment::{aggregate_daily, score_articles, SentimentSource};
use newslab_core::text::{
    daily_article_counts, domain_breakdown, headline_length_stats, lda_topics, publisher_activity,
    top_phrases, LdaParams, TfidfParams,
};

use crate::config::AnalysisConfig;
use crate::report::{AnalysisReport, SCHEMA_VERSION};

/// How many trailing days of article volume the report keeps.
const DAILY_TAIL: usize = 5;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Run the full pipeline from the CSV paths in `config`.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisReport, RunError> {
    let articles = load_news_csv(&config.news_path)?;
    let bars = load_prices_csv(&config.prices_path)?;
    Ok(run_from_data(&articles, &bars, config))
}

/// Run the pipeline over already-loaded rows.
///
/// Empty news input short-circuits the text and sentiment sections to
/// empty results; empty price input leaves the correlation undefined.
pub fn run_from_data(
    articles: &[NewsArticle],
    bars: &[Bar],
    config: &AnalysisConfig,
) -> AnalysisReport {
    // Sentiment
    let scored = score_articles(articles);
    let daily_sentiment = aggregate_daily(&scored, SentimentSource::Lexicon);

    // Text analytics
    let headlines: Vec<&str> = articles.iter().map(|a| a.headline.as_str()).collect();
    let daily_counts = daily_article_counts(articles);
    let tail_start = daily_counts.len().saturating_sub(DAILY_TAIL);
    let top = top_phrases(
        &headlines,
        &TfidfParams {
            max_ngram: 2,
            max_features: config.tfidf_max_features,
            top_k: config.tfidf_top_k,
        },
    );
    let topics = lda_topics(
        &headlines,
        &LdaParams {
            n_topics: config.lda_topics,
            n_top_words: config.lda_top_words,
            iterations: config.lda_iterations,
            seed: config.lda_seed,
        },
    );

    // Price enrichment
    let indicator_snapshot = indicator_snapshot(bars, config);
    let mut tickers: Vec<String> = indicator_snapshot.keys().cloned().collect();
    tickers.sort();

    // Alignment and correlation
    let aligned = align_sentiment_with_returns(&daily_sentiment, bars);
    let overall = overall_correlation(&aligned, SentimentField::Polarity);
    let by_ticker = correlations_by_ticker(
        &daily_sentiment,
        bars,
        SentimentField::Polarity,
        config.sentiment_shift_days,
    );

    AnalysisReport {
        schema_version: SCHEMA_VERSION,
        run_id: config.run_id(),
        news_rows: articles.len(),
        price_rows: bars.len(),
        tickers,
        headline_stats: headline_length_stats(articles),
        top_publishers: publisher_activity(articles, config.top_publishers),
        top_domains: domain_breakdown(articles, config.top_domains),
        daily_articles_tail: daily_counts[tail_start..].to_vec(),
        top_phrases: top,
        topics,
        daily_sentiment,
        aligned,
        overall_correlation: overall.is_finite().then_some(overall),
        sentiment_shift_days: config.sentiment_shift_days,
        correlations_by_ticker: by_ticker,
        indicator_snapshot,
    }
}

/// Final finite indicator values per ticker.
fn indicator_snapshot(
    bars: &[Bar],
    config: &AnalysisConfig,
) -> BTreeMap<String, BTreeMap<String, f64>> {
    let mut by_ticker: BTreeMap<&str, Vec<Bar>> = BTreeMap::new();
    for bar in bars {
        by_ticker.entry(bar.ticker.as_str()).or_default().push(bar.clone());
    }

    let mut indicators: Vec<Box<dyn Indicator>> = vec![
        Box::new(Sma::new(config.ma_window)),
        Box::new(Rsi::new(config.rsi_window)),
        Box::new(Volatility::new(config.volatility_window)),
    ];
    indicators.push(Box::new(Macd::line(
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )));
    indicators.push(Box::new(Macd::signal_line(
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )));
    indicators.push(Box::new(Macd::histogram(
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )));
    for band in Bollinger::bands(config.bollinger_window, config.bollinger_mult) {
        indicators.push(Box::new(band));
    }

    let mut snapshot = BTreeMap::new();
    for (ticker, mut ticker_bars) in by_ticker {
        ticker_bars.sort_by_key(|b| b.date);
        let set = IndicatorSet::precompute(&indicators, &ticker_bars);
        let mut values = BTreeMap::new();
        for (name, _) in set.iter() {
            if let Some(v) = set.last_finite(name) {
                values.insert(name.to_string(), v);
            }
        }
        snapshot.insert(ticker.to_string(), values);
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn article(day: u32, headline: &str, ticker: &str) -> NewsArticle {
        NewsArticle {
            date: Some(Utc.with_ymd_and_hms(2024, 1, day, 13, 0, 0).unwrap()),
            headline: headline.to_string(),
            publisher: "wire".to_string(),
            url: None,
            stock: Some(ticker.to_string()),
        }
    }

    fn bar(ticker: &str, day: u32, close: f64) -> Bar {
        Bar {
            ticker: ticker.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn empty_news_short_circuits_text_sections() {
        let bars = vec![bar("AAA", 1, 10.0), bar("AAA", 2, 11.0)];
        let report = run_from_data(&[], &bars, &AnalysisConfig::default());
        assert_eq!(report.news_rows, 0);
        assert!(report.headline_stats.is_none());
        assert!(report.top_phrases.is_empty());
        assert!(report.topics.is_empty());
        assert!(report.daily_sentiment.is_empty());
        assert_eq!(report.overall_correlation, None);
        // Price side still runs.
        assert_eq!(report.price_rows, 2);
        assert_eq!(report.tickers, vec!["AAA"]);
        assert_eq!(report.aligned.len(), 2);
    }

    #[test]
    fn empty_prices_leave_correlation_undefined() {
        let articles = vec![article(1, "Shares surge on earnings beat", "AAA")];
        let report = run_from_data(&articles, &[], &AnalysisConfig::default());
        assert_eq!(report.price_rows, 0);
        assert!(report.aligned.is_empty());
        assert_eq!(report.overall_correlation, None);
        assert_eq!(report.correlations_by_ticker.len(), 1);
        assert_eq!(report.correlations_by_ticker[0].pair_count, 0);
    }

    #[test]
    fn snapshot_keeps_only_finite_values() {
        // Two bars are far too few for Bollinger(20) or volatility(21);
        // those names must be absent rather than NaN.
        let bars = vec![bar("AAA", 1, 10.0), bar("AAA", 2, 11.0)];
        let report = run_from_data(&[], &bars, &AnalysisConfig::default());
        let values = &report.indicator_snapshot["AAA"];
        assert!(values.contains_key("ma_5"));
        assert!(values.contains_key("macd"));
        assert!(!values.contains_key("bb_high_20"));
        assert!(!values.contains_key("volatility_21"));
        assert!(values.values().all(|v| v.is_finite()));
    }
}
