//! Lightweight text analytics over headlines.

pub mod lda;
pub mod publishers;
pub mod stats;
pub mod tfidf;
pub mod timeline;
pub mod tokenize;

pub use lda::{lda_topics, LdaParams};
pub use publishers::{domain_breakdown, publisher_activity, DomainCount, PublisherCount};
pub use stats::{headline_length_stats, HeadlineLengthStats};
pub use tfidf::{top_phrases, PhraseScore, TfidfParams};
pub use timeline::{
    daily_article_counts, hour_histogram, rolling_publisher_mix, DailyCount, HourCount,
    PublisherShare,
};
pub use tokenize::{ngrams, tokenize, STOP_WORDS};
