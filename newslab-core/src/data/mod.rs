//! CSV loading and schema validation.

pub mod loader;
pub mod schema;

pub use loader::{load_news_csv, load_prices_csv, parse_news_timestamp, DataError};
pub use schema::{HeaderIndex, SchemaError, NEWS_REQUIRED, PRICE_REQUIRED};
