//! Publication timing profiles: daily counts, hour histogram, publisher mix.

use std::collections::{BTreeMap, HashMap, VecDeque};

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::NewsArticle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub article_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourCount {
    pub hour: u32,
    pub article_count: usize,
}

/// One publisher's slice of one day's output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublisherShare {
    pub date: NaiveDate,
    pub publisher: String,
    pub article_count: usize,
    /// This publisher's fraction of the day's articles.
    pub share: f64,
    /// Trailing mean of `share` over this publisher's last `window` active days.
    pub rolling_share: f64,
}

/// Headlines per UTC calendar day, ascending. Rows without a parseable
/// timestamp are skipped.
pub fn daily_article_counts(articles: &[NewsArticle]) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for article in articles {
        if let Some(day) = article.day() {
            *counts.entry(day).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, article_count)| DailyCount {
            date,
            article_count,
        })
        .collect()
}

/// Article counts by hour of day (UTC), ascending by hour; only hours
/// that actually appear.
pub fn hour_histogram(articles: &[NewsArticle]) -> Vec<HourCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for article in articles {
        if let Some(dt) = article.date {
            *counts.entry(dt.hour()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(hour, article_count)| HourCount {
            hour,
            article_count,
        })
        .collect()
}

/// Per-day publisher shares with a rolling mean per publisher.
///
/// The rolling mean runs over each publisher's own active days (days it
/// published at least once), trailing `window` observations, partial
/// windows allowed. Output is sorted by (date, publisher).
pub fn rolling_publisher_mix(articles: &[NewsArticle], window: usize) -> Vec<PublisherShare> {
    assert!(window >= 1, "rolling window must be >= 1");

    let mut counts: BTreeMap<(NaiveDate, String), usize> = BTreeMap::new();
    let mut day_totals: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for article in articles {
        let Some(day) = article.day() else { continue };
        *counts.entry((day, article.publisher.clone())).or_insert(0) += 1;
        *day_totals.entry(day).or_insert(0) += 1;
    }

    // BTreeMap iteration order is (date, publisher), so each publisher's
    // rows stream past in date order.
    let mut trailing: HashMap<String, VecDeque<f64>> = HashMap::new();
    counts
        .into_iter()
        .map(|((date, publisher), article_count)| {
            let share = article_count as f64 / day_totals[&date] as f64;
            let shares = trailing.entry(publisher.clone()).or_default();
            shares.push_back(share);
            if shares.len() > window {
                shares.pop_front();
            }
            let rolling_share = shares.iter().sum::<f64>() / shares.len() as f64;
            PublisherShare {
                date,
                publisher,
                article_count,
                share,
                rolling_share,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(day: u32, hour: u32, publisher: &str) -> NewsArticle {
        NewsArticle {
            date: Some(Utc.with_ymd_and_hms(2020, 6, day, hour, 0, 0).unwrap()),
            headline: String::new(),
            publisher: publisher.to_string(),
            url: None,
            stock: None,
        }
    }

    #[test]
    fn daily_counts_group_by_calendar_day() {
        let articles = vec![
            article(1, 9, "a"),
            article(1, 17, "b"),
            article(3, 9, "a"),
        ];
        let counts = daily_article_counts(&articles);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].article_count, 2);
        assert_eq!(counts[1].date, NaiveDate::from_ymd_opt(2020, 6, 3).unwrap());
    }

    #[test]
    fn undated_articles_are_skipped() {
        let mut undated = article(1, 9, "a");
        undated.date = None;
        assert!(daily_article_counts(&[undated]).is_empty());
    }

    #[test]
    fn hour_histogram_counts_utc_hours() {
        let articles = vec![article(1, 9, "a"), article(2, 9, "a"), article(2, 16, "b")];
        let hist = hour_histogram(&articles);
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0].hour, 9);
        assert_eq!(hist[0].article_count, 2);
        assert_eq!(hist[1].hour, 16);
    }

    #[test]
    fn shares_sum_to_one_per_day() {
        let articles = vec![
            article(1, 9, "a"),
            article(1, 10, "a"),
            article(1, 11, "b"),
        ];
        let mix = rolling_publisher_mix(&articles, 30);
        let day_total: f64 = mix.iter().map(|row| row.share).sum();
        assert!((day_total - 1.0).abs() < 1e-12);
        let a = mix.iter().find(|row| row.publisher == "a").unwrap();
        assert!((a.share - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rolling_share_averages_trailing_days() {
        // Publisher "a": share 1.0 on day 1, 0.5 on day 2.
        let articles = vec![
            article(1, 9, "a"),
            article(2, 9, "a"),
            article(2, 10, "b"),
        ];
        let mix = rolling_publisher_mix(&articles, 2);
        let day2 = NaiveDate::from_ymd_opt(2020, 6, 2).unwrap();
        let day2_a = mix
            .iter()
            .find(|row| row.publisher == "a" && row.date == day2)
            .unwrap();
        assert!((day2_a.share - 0.5).abs() < 1e-12);
        assert!((day2_a.rolling_share - 0.75).abs() < 1e-12);
    }
}
