//! Criterion benchmarks for NewsLab hot paths.
//!
//! Benchmarks:
//! 1. Indicator precompute (MA, RSI, MACD, Bollinger batch)
//! 2. TF-IDF phrase ranking over a synthetic headline corpus
//! 3. Pearson correlation over long paired series

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use newslab_core::correlate::pearson;
use newslab_core::domain::Bar;
use newslab_core::indicators::{Bollinger, Indicator, IndicatorSet, Macd, Rsi, Sma};
use newslab_core::text::{top_phrases, TfidfParams};

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                ticker: "SPY".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0,
            }
        })
        .collect()
}

fn make_headlines(n: usize) -> Vec<String> {
    let subjects = ["apple", "oil", "banks", "chipmakers", "retailers", "airlines"];
    let verbs = ["surge", "fall", "rally", "slide", "jump", "drop"];
    let tails = [
        "on strong earnings",
        "after analyst downgrade",
        "as rates rise",
        "on record demand",
        "amid supply concerns",
    ];
    (0..n)
        .map(|i| {
            format!(
                "{} {} {}",
                subjects[i % subjects.len()],
                verbs[(i / 3) % verbs.len()],
                tails[(i / 7) % tails.len()]
            )
        })
        .collect()
}

fn bench_indicator_precompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_precompute");
    for n in [250usize, 2500] {
        let bars = make_bars(n);
        let mut indicators: Vec<Box<dyn Indicator>> = vec![
            Box::new(Sma::new(5)),
            Box::new(Rsi::new(14)),
        ];
        for macd in Macd::standard() {
            indicators.push(Box::new(macd));
        }
        for band in Bollinger::bands(20, 2.0) {
            indicators.push(Box::new(band));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| IndicatorSet::precompute(black_box(&indicators), black_box(bars)));
        });
    }
    group.finish();
}

fn bench_tfidf(c: &mut Criterion) {
    let headlines = make_headlines(2000);
    let texts: Vec<&str> = headlines.iter().map(String::as_str).collect();
    let params = TfidfParams::default();
    c.bench_function("tfidf_top_phrases_2000", |b| {
        b.iter(|| top_phrases(black_box(&texts), black_box(&params)));
    });
}

fn bench_pearson(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).sin()).collect();
    let ys: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.013).cos()).collect();
    c.bench_function("pearson_10k", |b| {
        b.iter(|| pearson(black_box(&xs), black_box(&ys)));
    });
}

criterion_group!(
    benches,
    bench_indicator_precompute,
    bench_tfidf,
    bench_pearson
);
criterion_main!(benches);
