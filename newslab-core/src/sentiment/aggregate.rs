//! Per-(day, ticker) sentiment aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::DailySentiment;
use crate::sentiment::ScoredArticle;

/// Which scorer's numbers to average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentSource {
    /// Word-list polarity and subjectivity.
    Lexicon,
    /// VADER compound as polarity; 1 - neu as subjectivity
    /// (the share of non-neutral mass).
    Vader,
}

/// Average sentiment per ticker and UTC calendar day.
///
/// Articles with no parseable date or no ticker cannot join price rows
/// and are skipped. Output is sorted by (date, ticker). Empty input
/// yields empty output.
pub fn aggregate_daily(scored: &[ScoredArticle], source: SentimentSource) -> Vec<DailySentiment> {
    let mut groups: BTreeMap<(NaiveDate, String), (f64, f64, usize)> = BTreeMap::new();

    for article in scored {
        let (Some(day), Some(ticker)) = (article.day, article.ticker.as_ref()) else {
            continue;
        };
        let (polarity, subjectivity) = match source {
            SentimentSource::Lexicon => (article.polarity, article.subjectivity),
            SentimentSource::Vader => (article.vader.compound, 1.0 - article.vader.neu),
        };
        let entry = groups.entry((day, ticker.clone())).or_insert((0.0, 0.0, 0));
        entry.0 += polarity;
        entry.1 += subjectivity;
        entry.2 += 1;
    }

    groups
        .into_iter()
        .map(|((date, ticker), (polarity_sum, subjectivity_sum, count))| DailySentiment {
            date,
            ticker,
            avg_polarity: polarity_sum / count as f64,
            avg_subjectivity: subjectivity_sum / count as f64,
            article_count: count,
        })
        .collect()
}
