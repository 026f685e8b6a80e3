//! TF-IDF phrase ranking.
//!
//! Weighting matches the common vectorizer defaults: raw term counts,
//! smoothed IDF `ln((1+n)/(1+df)) + 1`, L2-normalized document rows.
//! Phrase scores are the normalized weights summed over all documents.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::tokenize::{ngrams, tokenize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhraseScore {
    pub term: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct TfidfParams {
    /// Longest n-gram to extract (1 = unigrams only, 2 adds bigrams).
    pub max_ngram: usize,
    /// Vocabulary cap: keep the most frequent terms across the corpus.
    pub max_features: usize,
    /// How many ranked phrases to return.
    pub top_k: usize,
}

impl Default for TfidfParams {
    fn default() -> Self {
        Self {
            max_ngram: 2,
            max_features: 5000,
            top_k: 20,
        }
    }
}

/// Highest-scoring TF-IDF phrases across the corpus, descending, ties
/// broken by term. Empty corpora and all-stop-word corpora yield an
/// empty ranking.
pub fn top_phrases(texts: &[&str], params: &TfidfParams) -> Vec<PhraseScore> {
    assert!(params.max_ngram >= 1, "max_ngram must be >= 1");

    let docs: Vec<Vec<String>> = texts
        .iter()
        .map(|text| ngrams(&tokenize(text), 1, params.max_ngram))
        .collect();

    // Corpus term counts and document frequencies.
    let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for doc in &docs {
        let mut seen: HashSet<&str> = HashSet::new();
        for term in doc {
            *corpus_counts.entry(term).or_insert(0) += 1;
            if seen.insert(term) {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }
    }
    if corpus_counts.is_empty() {
        return Vec::new();
    }

    // Vocabulary cap: most frequent terms, ties by term.
    let vocab: HashSet<&str> = if corpus_counts.len() > params.max_features {
        let mut ranked: Vec<(&str, usize)> = corpus_counts.iter().map(|(&t, &c)| (t, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(params.max_features);
        ranked.into_iter().map(|(t, _)| t).collect()
    } else {
        corpus_counts.keys().copied().collect()
    };

    let n_docs = docs.len() as f64;
    let idf = |term: &str| ((1.0 + n_docs) / (1.0 + doc_freq[term] as f64)).ln() + 1.0;

    let mut scores: HashMap<&str, f64> = HashMap::new();
    for doc in &docs {
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        for term in doc {
            if vocab.contains(term.as_str()) {
                *term_counts.entry(term).or_insert(0) += 1;
            }
        }
        if term_counts.is_empty() {
            continue;
        }

        let weights: Vec<(&str, f64)> = term_counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 * idf(term)))
            .collect();
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        for (term, weight) in weights {
            *scores.entry(term).or_insert(0.0) += weight / norm;
        }
    }

    let mut ranked: Vec<PhraseScore> = scores
        .into_iter()
        .map(|(term, score)| PhraseScore {
            term: term.to_string(),
            score,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    ranked.truncate(params.top_k);
    ranked
}
