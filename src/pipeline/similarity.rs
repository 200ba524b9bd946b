//! Word-overlap text similarity.
//!
//! Used by the segment merger to spot the near-duplicate sentences the
//! upstream transcriber emits across chunk boundaries. Surface overlap
//! only; no embeddings, no fuzzy matching.

use crate::defaults;
use std::collections::HashSet;

/// Similarity between two texts in `[0, 1]`.
///
/// If one normalized (lowercased, trimmed) text is a substring of the
/// other, returns 0.9 outright. Otherwise Jaccard similarity over the
/// whitespace-tokenized word sets, with a +0.2 bonus when the texts share
/// a contiguous run of 3 or more words, clamped to 1.0.
///
/// Symmetric: `similarity(a, b) == similarity(b, a)`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_norm = a.trim().to_lowercase();
    let b_norm = b.trim().to_lowercase();
    if a_norm.is_empty() || b_norm.is_empty() {
        return 0.0;
    }

    if a_norm.contains(&b_norm) || b_norm.contains(&a_norm) {
        return defaults::SUBSTRING_SIMILARITY;
    }

    let a_words: Vec<&str> = a_norm.split_whitespace().collect();
    let b_words: Vec<&str> = b_norm.split_whitespace().collect();
    let a_set: HashSet<&str> = a_words.iter().copied().collect();
    let b_set: HashSet<&str> = b_words.iter().copied().collect();

    let intersection = a_set.intersection(&b_set).count();
    let union = a_set.union(&b_set).count();
    if union == 0 {
        return 0.0;
    }

    let mut score = intersection as f64 / union as f64;
    if longest_common_run(&a_words, &b_words) >= defaults::MIN_BONUS_RUN {
        score += defaults::RUN_BONUS;
    }
    score.min(1.0)
}

/// Length of the longest common contiguous word run between two word lists,
/// found by brute-force scan over all start-offset pairs. Inputs are short
/// (single recognized sentences), so the quadratic scan is fine.
pub fn longest_common_run(a: &[&str], b: &[&str]) -> usize {
    let mut best = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            best = best.max(len);
        }
    }
    best
}
