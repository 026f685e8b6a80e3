//! End-to-end smoke tests over the core building blocks, news to
//! correlation, without the runner.

use chrono::{NaiveDate, TimeZone, Utc};

use newslab_core::correlate::{
    align_sentiment_with_returns, correlations_by_ticker, overall_correlation, SentimentField,
};
use newslab_core::domain::{Bar, NewsArticle};
use newslab_core::indicators::{Bollinger, Indicator, IndicatorSet, Macd, Rsi, Sma, Volatility};
use newslab_core::sentiment::{aggregate_daily, score_articles, SentimentSource};
use newslab_core::text::{headline_length_stats, publisher_activity, top_phrases, TfidfParams};

fn article(day: u32, headline: &str, ticker: &str) -> NewsArticle {
    NewsArticle {
        date: Some(Utc.with_ymd_and_hms(2024, 1, day, 14, 30, 0).unwrap()),
        headline: headline.to_string(),
        publisher: "Benzinga".to_string(),
        url: Some("https://www.benzinga.com/a".to_string()),
        stock: Some(ticker.to_string()),
    }
}

fn bar(ticker: &str, day: u32, close: f64) -> Bar {
    Bar {
        ticker: ticker.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 10_000.0,
    }
}

#[test]
fn sentiment_flows_through_to_correlation() {
    let articles = vec![
        article(2, "Shares surge on record earnings beat", "AAA"),
        article(3, "Stock plunges as lawsuit fears grow", "AAA"),
        article(4, "Strong growth lifts shares higher", "AAA"),
    ];
    let bars = vec![
        bar("AAA", 1, 100.0),
        bar("AAA", 2, 103.0),
        bar("AAA", 3, 99.0),
        bar("AAA", 4, 104.0),
    ];

    let scored = score_articles(&articles);
    let daily = aggregate_daily(&scored, SentimentSource::Lexicon);
    assert_eq!(daily.len(), 3);
    assert!(daily[0].avg_polarity > 0.0);
    assert!(daily[1].avg_polarity < 0.0);

    let aligned = align_sentiment_with_returns(&daily, &bars);
    assert_eq!(aligned.len(), 4);

    // Good news lands on up days, bad news on the down day.
    let r = overall_correlation(&aligned, SentimentField::Polarity);
    assert!(r > 0.8, "expected strong same-day correlation, got {r}");

    let per_ticker = correlations_by_ticker(&daily, &bars, SentimentField::Polarity, 0);
    assert_eq!(per_ticker.len(), 1);
    assert_eq!(per_ticker[0].pair_count, 3);
}

#[test]
fn indicator_precompute_covers_the_report_columns() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let bars: Vec<Bar> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| bar("AAA", 1 + (i as u32 % 28), c))
        .collect();

    let mut indicators: Vec<Box<dyn Indicator>> = vec![
        Box::new(Sma::new(5)),
        Box::new(Rsi::new(14)),
        Box::new(Volatility::new(21)),
    ];
    for macd in Macd::standard() {
        indicators.push(Box::new(macd));
    }
    for band in Bollinger::bands(20, 2.0) {
        indicators.push(Box::new(band));
    }

    let set = IndicatorSet::precompute(&indicators, &bars);
    for name in [
        "ma_5",
        "rsi_14",
        "volatility_21",
        "macd",
        "macd_signal",
        "macd_hist",
        "bb_high_20",
        "bb_mid_20",
        "bb_low_20",
    ] {
        let series = set.get_series(name).unwrap_or_else(|| panic!("missing {name}"));
        assert_eq!(series.len(), bars.len());
    }
    assert!(set.last_finite("ma_5").is_some());
    assert!(set.last_finite("macd").is_some());
}

#[test]
fn text_analytics_handle_a_small_corpus() {
    let articles = vec![
        article(2, "Apple earnings beat expectations", "AAPL"),
        article(2, "Apple earnings call scheduled", "AAPL"),
        article(3, "Oil prices fall on supply glut", "XOM"),
    ];
    let stats = headline_length_stats(&articles).unwrap();
    assert_eq!(stats.count, 3);
    assert!(stats.mean > 0.0);

    let publishers = publisher_activity(&articles, 5);
    assert_eq!(publishers[0].publisher, "Benzinga");
    assert_eq!(publishers[0].article_count, 3);

    let texts: Vec<&str> = articles.iter().map(|a| a.headline.as_str()).collect();
    let phrases = top_phrases(&texts, &TfidfParams::default());
    assert!(phrases.iter().any(|p| p.term.contains("earnings")));
}
