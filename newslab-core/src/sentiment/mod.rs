//! Headline sentiment scoring and daily aggregation.
//!
//! Two scorers run over every headline: the word-list
//! polarity/subjectivity scorer in `lexicon` and the VADER scorer in
//! `vader`. `score_articles` applies both; `aggregate` averages the
//! scores per ticker and calendar day.

pub mod aggregate;
pub mod lexicon;
pub mod vader;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::NewsArticle;

pub use aggregate::{aggregate_daily, SentimentSource};
pub use lexicon::HeadlineScorer;
pub use vader::{VaderScorer, VaderScores};

/// Sentiment scores for one headline, keyed to its day and ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredArticle {
    pub day: Option<NaiveDate>,
    pub ticker: Option<String>,
    pub polarity: f64,
    pub subjectivity: f64,
    pub vader: VaderScores,
}

/// Score every headline with both scorers.
///
/// Both analyzers are built once and reused across the batch.
pub fn score_articles(articles: &[NewsArticle]) -> Vec<ScoredArticle> {
    let lexicon = HeadlineScorer::new();
    let vader = VaderScorer::new();

    articles
        .iter()
        .map(|article| {
            let (polarity, subjectivity) = lexicon.score(&article.headline);
            ScoredArticle {
                day: article.day(),
                ticker: article.stock.clone(),
                polarity,
                subjectivity,
                vader: vader.score(&article.headline),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn scoring_keeps_day_and_ticker() {
        let articles = vec![NewsArticle {
            date: Some(Utc.with_ymd_and_hms(2020, 6, 5, 14, 0, 0).unwrap()),
            headline: "Shares surge on record earnings".into(),
            publisher: "wire".into(),
            url: None,
            stock: Some("AAPL".into()),
        }];
        let scored = score_articles(&articles);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].day, NaiveDate::from_ymd_opt(2020, 6, 5));
        assert_eq!(scored[0].ticker.as_deref(), Some("AAPL"));
        assert!(scored[0].polarity > 0.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(score_articles(&[]).is_empty());
    }
}
