//! Topic modeling via collapsed Gibbs sampling.
//!
//! Documents are bags of unigram tokens. The sampler runs a fixed number
//! of sweeps with symmetric priors (alpha = 50/k, beta = 0.01) and a
//! seeded RNG, so the same corpus and seed always produce the same
//! topics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::text::tokenize::tokenize;

#[derive(Debug, Clone)]
pub struct LdaParams {
    pub n_topics: usize,
    pub n_top_words: usize,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            n_topics: 5,
            n_top_words: 10,
            iterations: 100,
            seed: 42,
        }
    }
}

/// Fit LDA over the corpus and return the top words per topic.
///
/// Corpora with no usable tokens return an empty list.
pub fn lda_topics(texts: &[&str], params: &LdaParams) -> Vec<Vec<String>> {
    assert!(params.n_topics >= 1, "LDA needs at least one topic");
    assert!(params.iterations >= 1, "LDA needs at least one sweep");

    // Vocabulary and documents as token-id sequences.
    let mut vocab: Vec<String> = Vec::new();
    let mut vocab_index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    let mut docs: Vec<Vec<usize>> = Vec::new();
    for text in texts {
        let ids: Vec<usize> = tokenize(text)
            .into_iter()
            .map(|token| {
                *vocab_index.entry(token.clone()).or_insert_with(|| {
                    vocab.push(token);
                    vocab.len() - 1
                })
            })
            .collect();
        if !ids.is_empty() {
            docs.push(ids);
        }
    }
    if vocab.is_empty() {
        return Vec::new();
    }

    let k = params.n_topics;
    let v = vocab.len();
    let alpha = 50.0 / k as f64;
    let beta = 0.01;

    let mut rng = StdRng::seed_from_u64(params.seed);

    // Count matrices: doc-topic, topic-word, topic totals.
    let mut n_dk = vec![vec![0usize; k]; docs.len()];
    let mut n_kw = vec![vec![0usize; v]; k];
    let mut n_k = vec![0usize; k];

    // Random initial assignment.
    let mut assignments: Vec<Vec<usize>> = docs
        .iter()
        .enumerate()
        .map(|(d, doc)| {
            doc.iter()
                .map(|&w| {
                    let topic = rng.gen_range(0..k);
                    n_dk[d][topic] += 1;
                    n_kw[topic][w] += 1;
                    n_k[topic] += 1;
                    topic
                })
                .collect()
        })
        .collect();

    let mut weights = vec![0.0f64; k];
    for _ in 0..params.iterations {
        for (d, doc) in docs.iter().enumerate() {
            for (pos, &w) in doc.iter().enumerate() {
                let old = assignments[d][pos];
                n_dk[d][old] -= 1;
                n_kw[old][w] -= 1;
                n_k[old] -= 1;

                let mut total = 0.0;
                for (topic, weight) in weights.iter_mut().enumerate() {
                    *weight = (n_dk[d][topic] as f64 + alpha)
                        * (n_kw[topic][w] as f64 + beta)
                        / (n_k[topic] as f64 + beta * v as f64);
                    total += *weight;
                }

                let mut draw = rng.gen::<f64>() * total;
                let mut new = k - 1;
                for (topic, &weight) in weights.iter().enumerate() {
                    if draw < weight {
                        new = topic;
                        break;
                    }
                    draw -= weight;
                }

                assignments[d][pos] = new;
                n_dk[d][new] += 1;
                n_kw[new][w] += 1;
                n_k[new] += 1;
            }
        }
    }

    // Top words per topic by count, ties broken by term.
    n_kw.iter()
        .map(|word_counts| {
            let mut ranked: Vec<(usize, usize)> = word_counts
                .iter()
                .copied()
                .enumerate()
                .filter(|&(_, count)| count > 0)
                .collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| vocab[a.0].cmp(&vocab[b.0])));
            ranked
                .into_iter()
                .take(params.n_top_words)
                .map(|(word, _)| vocab[word].clone())
                .collect()
        })
        .collect()
}
