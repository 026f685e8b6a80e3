//! Word-list polarity and subjectivity scorer for headlines.
//!
//! Each lexicon word carries a polarity in [-1, 1] and a subjectivity in
//! [0, 1]. A headline scores the mean over its matched words; a negator
//! within the two preceding tokens flips a word's polarity contribution.
//! Headlines with no matched words score (0.0, 0.0).

use std::collections::{HashMap, HashSet};

/// (word, polarity, subjectivity) — financial vocabulary first, general
/// opinion words after.
const LEXICON: &[(&str, f64, f64)] = &[
    // Strongly positive market words
    ("soars", 1.0, 0.9),
    ("soar", 1.0, 0.9),
    ("surges", 0.9, 0.8),
    ("surge", 0.9, 0.8),
    ("skyrockets", 1.0, 0.9),
    ("rallies", 0.8, 0.7),
    ("rally", 0.8, 0.7),
    ("breakout", 0.6, 0.6),
    ("record", 0.6, 0.4),
    ("beats", 0.7, 0.5),
    ("beat", 0.7, 0.5),
    ("tops", 0.6, 0.5),
    ("outperform", 0.7, 0.6),
    ("outperforms", 0.7, 0.6),
    ("upgrade", 0.6, 0.4),
    ("upgrades", 0.6, 0.4),
    ("upgraded", 0.6, 0.4),
    ("bullish", 0.8, 0.8),
    ("buy", 0.4, 0.4),
    ("growth", 0.5, 0.4),
    ("gains", 0.6, 0.5),
    ("gain", 0.6, 0.5),
    ("profit", 0.5, 0.3),
    ("profits", 0.5, 0.3),
    ("wins", 0.6, 0.5),
    ("win", 0.6, 0.5),
    ("strong", 0.6, 0.6),
    ("higher", 0.4, 0.3),
    ("rises", 0.5, 0.4),
    ("rise", 0.5, 0.4),
    ("jumps", 0.6, 0.5),
    ("jump", 0.6, 0.5),
    ("climbs", 0.5, 0.4),
    ("climb", 0.5, 0.4),
    ("boosts", 0.5, 0.4),
    ("boost", 0.5, 0.4),
    ("momentum", 0.4, 0.5),
    ("opportunity", 0.4, 0.6),
    ("upbeat", 0.6, 0.7),
    ("optimistic", 0.6, 0.8),
    // Strongly negative market words
    ("plunges", -1.0, 0.9),
    ("plunge", -1.0, 0.9),
    ("crashes", -1.0, 0.9),
    ("crash", -1.0, 0.9),
    ("collapses", -1.0, 0.9),
    ("collapse", -1.0, 0.9),
    ("tumbles", -0.8, 0.8),
    ("tumble", -0.8, 0.8),
    ("sinks", -0.7, 0.7),
    ("sink", -0.7, 0.7),
    ("slides", -0.6, 0.6),
    ("slide", -0.6, 0.6),
    ("slumps", -0.7, 0.7),
    ("slump", -0.7, 0.7),
    ("falls", -0.5, 0.4),
    ("fall", -0.5, 0.4),
    ("drops", -0.5, 0.4),
    ("drop", -0.5, 0.4),
    ("misses", -0.7, 0.5),
    ("miss", -0.7, 0.5),
    ("downgrade", -0.6, 0.4),
    ("downgrades", -0.6, 0.4),
    ("downgraded", -0.6, 0.4),
    ("bearish", -0.8, 0.8),
    ("sell", -0.4, 0.4),
    ("selloff", -0.7, 0.6),
    ("losses", -0.6, 0.4),
    ("loss", -0.6, 0.4),
    ("weak", -0.5, 0.6),
    ("lower", -0.4, 0.3),
    ("cuts", -0.5, 0.4),
    ("cut", -0.5, 0.4),
    ("warns", -0.6, 0.6),
    ("warning", -0.6, 0.6),
    ("lawsuit", -0.5, 0.4),
    ("fraud", -0.9, 0.7),
    ("bankruptcy", -0.9, 0.6),
    ("recession", -0.7, 0.6),
    ("fears", -0.6, 0.7),
    ("fear", -0.6, 0.7),
    ("panic", -0.8, 0.8),
    ("risk", -0.3, 0.5),
    ("concerns", -0.4, 0.6),
    ("concern", -0.4, 0.6),
    // General opinion words
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.8),
    ("best", 1.0, 0.3),
    ("excellent", 1.0, 1.0),
    ("positive", 0.5, 0.6),
    ("bad", -0.7, 0.7),
    ("worst", -1.0, 0.3),
    ("terrible", -1.0, 1.0),
    ("negative", -0.5, 0.6),
    ("disappointing", -0.6, 0.7),
    ("uncertain", -0.3, 0.8),
    ("volatile", -0.2, 0.7),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "hardly", "fails", "fail"];

/// How many preceding tokens a negator can reach.
const NEGATION_WINDOW: usize = 2;

pub struct HeadlineScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
    negators: HashSet<&'static str>,
}

impl HeadlineScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// (polarity, subjectivity) for one headline.
    pub fn score(&self, text: &str) -> (f64, f64) {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(polarity, subjectivity)) = self.lexicon.get(token) else {
                continue;
            };
            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| self.negators.contains(t));
            polarity_sum += if negated { -polarity } else { polarity };
            subjectivity_sum += subjectivity;
            matched += 1;
        }

        if matched == 0 {
            return (0.0, 0.0);
        }
        let n = matched as f64;
        ((polarity_sum / n).clamp(-1.0, 1.0), subjectivity_sum / n)
    }
}

impl Default for HeadlineScorer {
    fn default() -> Self {
        Self::new()
    }
}
