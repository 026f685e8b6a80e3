//! Headline length statistics.

use serde::{Deserialize, Serialize};

use crate::domain::NewsArticle;

/// Distribution summary of headline character lengths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeadlineLengthStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Summarize headline lengths; `None` for an empty dataset.
pub fn headline_length_stats(articles: &[NewsArticle]) -> Option<HeadlineLengthStats> {
    if articles.is_empty() {
        return None;
    }

    let mut lengths: Vec<f64> = articles
        .iter()
        .map(|a| a.headline.chars().count() as f64)
        .collect();
    lengths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(HeadlineLengthStats {
        count: lengths.len(),
        mean: mean(&lengths),
        std: sample_std(&lengths),
        min: lengths[0],
        p25: percentile(&lengths, 0.25),
        p50: percentile(&lengths, 0.50),
        p75: percentile(&lengths, 0.75),
        max: lengths[lengths.len() - 1],
    })
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divide by N-1); 0.0 for a single value.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Linear-interpolation percentile over an ascending-sorted slice.
pub(crate) fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = pos - lo as f64;
    sorted[lo] * (1.0 - weight) + sorted[hi] * weight
}
