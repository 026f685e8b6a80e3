//! CSV → typed rows.
//!
//! News loading is best-effort: a row with an unparseable timestamp keeps
//! `date = None`, a missing headline becomes the empty string, a missing
//! publisher becomes "unknown". Price loading is strict: prices are the
//! spine of the analysis, so a bad date or number there is a hard error.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use crate::data::schema::{HeaderIndex, SchemaError, NEWS_REQUIRED, PRICE_REQUIRED};
use crate::domain::{Bar, NewsArticle};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{path} row {row}: invalid {field} value '{value}'")]
    BadField {
        path: String,
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Parse a news timestamp in any of the formats the dataset mixes.
///
/// Accepted: RFC 3339, `%Y-%m-%d %H:%M:%S` with or without a numeric
/// offset, and a plain `%Y-%m-%d` date (midnight UTC). Anything else is
/// `None`.
pub fn parse_news_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

/// Load the news dataset with parsed timestamps.
pub fn load_news_csv(path: &Path) -> Result<Vec<NewsArticle>, DataError> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Read {
        path: display.clone(),
        source,
    })?;

    let headers = reader.headers().map_err(|source| DataError::Read {
        path: display.clone(),
        source,
    })?;
    let index = HeaderIndex::from_headers(headers);
    index.validate(NEWS_REQUIRED)?;

    let date_col = index.get("date");
    let headline_col = index.get("headline");
    let publisher_col = index.get("publisher");
    let url_col = index.get("url");
    // The dataset names the ticker column "stock"; accept common synonyms.
    let stock_col = index
        .get("stock")
        .or_else(|| index.get("ticker"))
        .or_else(|| index.get("symbol"));

    let mut articles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataError::Read {
            path: display.clone(),
            source,
        })?;
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("").trim();

        let publisher = field(publisher_col);
        let url = field(url_col);
        let stock = field(stock_col);

        articles.push(NewsArticle {
            date: parse_news_timestamp(field(date_col)),
            headline: field(headline_col).to_string(),
            publisher: if publisher.is_empty() {
                "unknown".to_string()
            } else {
                publisher.to_string()
            },
            url: (!url.is_empty()).then(|| url.to_string()),
            stock: (!stock.is_empty()).then(|| stock.to_uppercase()),
        });
    }
    Ok(articles)
}

/// Load OHLCV price data, sorted ascending by date.
///
/// A ticker column ("ticker", "stock", or "symbol") is optional; files
/// without one describe a single unnamed instrument and get an empty
/// ticker, which the alignment join treats as matching by day alone.
pub fn load_prices_csv(path: &Path) -> Result<Vec<Bar>, DataError> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Read {
        path: display.clone(),
        source,
    })?;

    let headers = reader.headers().map_err(|source| DataError::Read {
        path: display.clone(),
        source,
    })?;
    let index = HeaderIndex::from_headers(headers);
    index.validate(PRICE_REQUIRED)?;

    let date_col = index.get("date");
    let ticker_col = index
        .get("ticker")
        .or_else(|| index.get("stock"))
        .or_else(|| index.get("symbol"));

    let mut bars = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| DataError::Read {
            path: display.clone(),
            source,
        })?;
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("").trim();

        let raw_date = field(date_col);
        let date = parse_news_timestamp(raw_date)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| DataError::BadField {
                path: display.clone(),
                row: row + 1,
                field: "date",
                value: raw_date.to_string(),
            })?;

        let number = |name: &'static str| -> Result<f64, DataError> {
            let raw = field(index.get(name));
            raw.parse::<f64>().map_err(|_| DataError::BadField {
                path: display.clone(),
                row: row + 1,
                field: name,
                value: raw.to_string(),
            })
        };

        bars.push(Bar {
            ticker: field(ticker_col).to_uppercase(),
            date,
            open: number("open")?,
            high: number("high")?,
            low: number("low")?,
            close: number("close")?,
            volume: number("volume")?,
        });
    }

    bars.sort_by(|a, b| (a.ticker.as_str(), a.date).cmp(&(b.ticker.as_str(), b.date)));
    Ok(bars)
}
