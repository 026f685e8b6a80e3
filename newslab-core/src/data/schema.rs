//! Required-column checks for the two CSV shapes.
//!
//! Column matching is case-insensitive: `Date` and `date` name the same
//! column. The loader works through a `HeaderIndex`, which maps lowercase
//! column names to their positions in the header record.

use std::collections::HashMap;

/// Columns the news dataset must carry.
pub const NEWS_REQUIRED: &[&str] = &["date", "headline"];

/// Columns the price dataset must carry (plus some date column).
pub const PRICE_REQUIRED: &[&str] = &["date", "open", "high", "low", "close", "volume"];

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
}

/// Lowercased header-name → position lookup for a CSV file.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Self { positions }
    }

    /// Position of a column by lowercase name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Check that every required column is present.
    pub fn validate(&self, required: &[&str]) -> Result<(), SchemaError> {
        for &name in required {
            if !self.positions.contains_key(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}
