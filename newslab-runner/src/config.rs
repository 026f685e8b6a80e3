//! Serializable analysis configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for an analysis run (content-addressable hash).
pub type RunId = String;

/// All parameters needed to reproduce one analysis run.
///
/// Loadable from TOML; absent keys fall back to the defaults below, so a
/// config file only needs the input paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// News CSV (date, headline, publisher, url, stock).
    pub news_path: PathBuf,
    /// Price CSV (date, open, high, low, close, volume, optional ticker).
    pub prices_path: PathBuf,

    /// Moving average window.
    pub ma_window: usize,
    /// RSI smoothing window.
    pub rsi_window: usize,
    /// MACD spans: fast, slow, signal.
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// Bollinger window and stddev multiplier.
    pub bollinger_window: usize,
    pub bollinger_mult: f64,
    /// Rolling window for return volatility.
    pub volatility_window: usize,

    /// Pair sentiment on day d with the return on day d + shift.
    pub sentiment_shift_days: i64,

    /// TF-IDF vocabulary cap and ranking size.
    pub tfidf_max_features: usize,
    pub tfidf_top_k: usize,

    /// LDA topic count, words per topic, sweeps, and RNG seed.
    pub lda_topics: usize,
    pub lda_top_words: usize,
    pub lda_iterations: usize,
    pub lda_seed: u64,

    /// Top-n sizes for publisher and domain tables.
    pub top_publishers: usize,
    pub top_domains: usize,
    /// Rolling window (active days) for the publisher mix.
    pub publisher_mix_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            news_path: PathBuf::from("data/raw/sample_news.csv"),
            prices_path: PathBuf::from("data/raw/sample_prices.csv"),
            ma_window: 5,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_mult: 2.0,
            volatility_window: 21,
            sentiment_shift_days: 0,
            tfidf_max_features: 5000,
            tfidf_top_k: 20,
            lda_topics: 5,
            lda_top_words: 10,
            lda_iterations: 100,
            lda_seed: 42,
            top_publishers: 10,
            top_domains: 10,
            publisher_mix_window: 30,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Computes a deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs get the same RunId, so reports can
    /// be compared or deduplicated by id.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("AnalysisConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        hash.to_hex().to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
