//! Publisher and source-domain distributions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::NewsArticle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublisherCount {
    pub publisher: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainCount {
    pub domain: String,
    pub article_count: usize,
}

/// Article counts per publisher, descending, ties broken by name.
pub fn publisher_activity(articles: &[NewsArticle], top_n: usize) -> Vec<PublisherCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        *counts.entry(article.publisher.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<PublisherCount> = counts
        .into_iter()
        .map(|(publisher, article_count)| PublisherCount {
            publisher: publisher.to_string(),
            article_count,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.article_count
            .cmp(&a.article_count)
            .then_with(|| a.publisher.cmp(&b.publisher))
    });
    ranked.truncate(top_n);
    ranked
}

/// Article counts per source domain extracted from the url column.
pub fn domain_breakdown(articles: &[NewsArticle], top_n: usize) -> Vec<DomainCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for article in articles {
        let domain = article
            .url
            .as_deref()
            .map(extract_domain)
            .unwrap_or_else(|| "unknown".to_string());
        *counts.entry(domain).or_insert(0) += 1;
    }

    let mut ranked: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, article_count)| DomainCount {
            domain,
            article_count,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.article_count
            .cmp(&a.article_count)
            .then_with(|| a.domain.cmp(&b.domain))
    });
    ranked.truncate(top_n);
    ranked
}

/// Hostname of a URL: scheme and userinfo stripped, path/query/port cut,
/// leading "www." removed, lowercased. "unknown" when nothing is left.
pub(crate) fn extract_domain(url: &str) -> String {
    let rest = url.trim();
    let rest = match rest.find("://") {
        Some(idx) => &rest[idx + 3..],
        None => rest,
    };
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");
    let host = host.trim_start_matches("www.").to_lowercase();
    if host.is_empty() {
        "unknown".to_string()
    } else {
        host
    }
}
