//! Phrase merging and subphrase elimination.
//!
//! N-gram extraction over overlapping windows yields families of
//! phrases that are fragments of one longer statement. This stage fuses
//! fragments that share a long enough word run into a single phrase,
//! then removes any phrase nested inside a retained longer one.

use crate::defaults;
use crate::pipeline::types::{normalize, word_count};
use crate::stopwords::Stopwords;

/// Position and length of a common contiguous word run.
struct Run {
    a_start: usize,
    b_start: usize,
    len: usize,
}

pub struct PhraseMerger<'a> {
    stopwords: &'a Stopwords,
    min_run: usize,
    min_run_long: usize,
    overlap_ratio: f64,
}

impl<'a> PhraseMerger<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self::with_overlap_ratio(stopwords, defaults::MIN_OVERLAP_RATIO)
    }

    pub fn with_overlap_ratio(stopwords: &'a Stopwords, overlap_ratio: f64) -> Self {
        Self {
            stopwords,
            min_run: defaults::MIN_MERGE_RUN,
            min_run_long: defaults::MIN_MERGE_RUN_LONG,
            overlap_ratio,
        }
    }

    /// Fuse overlapping phrases, then drop nested ones.
    ///
    /// Phrases are visited longest first. Each phrase merges with at
    /// most one partner per pass; the merged phrase must be strictly
    /// longer (in words) than both inputs, otherwise the pair is left
    /// alone. Unmerged 2-word phrases survive only when they contain a
    /// non-stopword of 3+ characters.
    pub fn merge(&self, phrases: &[String]) -> Vec<String> {
        let mut sorted: Vec<&String> = phrases.iter().collect();
        sorted.sort_by(|a, b| word_count(b).cmp(&word_count(a)));

        let mut used = vec![false; sorted.len()];
        let mut out = Vec::new();

        for i in 0..sorted.len() {
            if used[i] {
                continue;
            }
            let mut merged_here = false;
            for j in (i + 1)..sorted.len() {
                if used[j] {
                    continue;
                }
                if let Some(merged) = self.try_merge(sorted[i], sorted[j]) {
                    used[i] = true;
                    used[j] = true;
                    out.push(merged);
                    merged_here = true;
                    break;
                }
            }
            if !merged_here && self.keeps_standalone(sorted[i]) {
                used[i] = true;
                out.push(sorted[i].clone());
            }
        }

        remove_subphrases(out)
    }

    /// Merge two phrases around their longest common word run, or None
    /// when no qualifying run exists or the merge would not grow the
    /// phrase. The run is found case-insensitively; the merged text is
    /// spliced from the original-case words.
    fn try_merge(&self, a: &str, b: &str) -> Option<String> {
        let a_orig: Vec<&str> = a.split_whitespace().collect();
        let b_orig: Vec<&str> = b.split_whitespace().collect();
        let a_lower: Vec<String> = a_orig.iter().map(|w| w.to_lowercase()).collect();
        let b_lower: Vec<String> = b_orig.iter().map(|w| w.to_lowercase()).collect();
        let a_words: Vec<&str> = a_lower.iter().map(String::as_str).collect();
        let b_words: Vec<&str> = b_lower.iter().map(String::as_str).collect();

        let run = longest_run(&a_words, &b_words)?;

        let min_run = if a_words.len() >= defaults::LONG_PHRASE_WORDS
            && b_words.len() >= defaults::LONG_PHRASE_WORDS
        {
            self.min_run_long
        } else {
            self.min_run
        };
        if run.len < min_run {
            return None;
        }

        let shorter = a_words.len().min(b_words.len());
        if (run.len as f64) < self.overlap_ratio * shorter as f64 {
            return None;
        }

        // Two ways to stitch: keep a's prefix with b's suffix, or b's
        // prefix with a's suffix. Take the wordier one; ties go to the
        // first.
        let first = splice(&a_orig, &b_orig, &run);
        let second = splice(
            &b_orig,
            &a_orig,
            &Run {
                a_start: run.b_start,
                b_start: run.a_start,
                len: run.len,
            },
        );
        let merged = if second.len() > first.len() { second } else { first };

        if merged.len() > a_words.len() && merged.len() > b_words.len() {
            Some(merged.join(" "))
        } else {
            None
        }
    }

    fn keeps_standalone(&self, phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.len() != 2 {
            return true;
        }
        words
            .iter()
            .any(|w| !self.stopwords.contains(w) && w.chars().count() >= 3)
    }
}

/// Longest common contiguous run with its positions in both word lists.
/// Earliest positions win among equal-length runs.
fn longest_run(a: &[&str], b: &[&str]) -> Option<Run> {
    let mut best: Option<Run> = None;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len > 0 && best.as_ref().is_none_or(|r| len > r.len) {
                best = Some(Run {
                    a_start: i,
                    b_start: j,
                    len,
                });
            }
        }
    }
    best
}

/// a's words before the run, the run itself, then b's words after it.
fn splice(a: &[&str], b: &[&str], run: &Run) -> Vec<String> {
    let mut out: Vec<String> = a[..run.a_start + run.len].iter().map(|w| w.to_string()).collect();
    out.extend(b[run.b_start + run.len..].iter().map(|w| w.to_string()));
    out
}

/// Drop phrases whose normalized text occurs as a whitespace-delimited
/// contiguous substring of a retained longer phrase. Longest first, so
/// the containing phrase is always seen before its fragments.
pub fn remove_subphrases(phrases: Vec<String>) -> Vec<String> {
    let mut sorted = phrases;
    sorted.sort_by(|a, b| word_count(b).cmp(&word_count(a)));

    let mut kept: Vec<String> = Vec::new();
    for phrase in sorted {
        let norm = normalize(&phrase);
        let nested = kept.iter().any(|longer| {
            let longer_norm = normalize(longer);
            longer_norm != norm
                && format!(" {} ", longer_norm).contains(&format!(" {} ", norm))
        });
        if !nested {
            kept.push(phrase);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(phrases: &[&str]) -> Vec<String> {
        let sw = Stopwords::from_words(["de", "voor", "het", "van"]);
        let merger = PhraseMerger::new(&sw);
        merger.merge(&phrases.iter().map(|p| p.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn overlapping_fragments_fuse() {
        let out = merge(&[
            "nieuwe maatregelen voor de economie",
            "maatregelen voor de economie vandaag",
        ]);
        assert_eq!(out, vec!["nieuwe maatregelen voor de economie vandaag"]);
    }

    #[test]
    fn short_runs_do_not_merge() {
        // Only "de" in common: run of 1 fails the minimum.
        let out = merge(&["de grote stad", "de kleine hond"]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn both_long_phrases_need_a_longer_run() {
        // 5-word phrases sharing a 2-word run that covers 40% of the
        // shorter, which would qualify were either phrase shorter.
        let out = merge(&[
            "aaa bbb grote storm nadert",
            "grote storm ccc ddd eee",
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn run_must_cover_enough_of_the_shorter_phrase() {
        // A 3-word run against two 8-word phrases: 3/8 < 0.4, no merge.
        let out = merge(&[
            "grote storm nadert a1 a2 a3 a4 a5",
            "b1 b2 grote storm nadert b3 b4 b5",
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn merge_must_strictly_grow() {
        // The run qualifies but no arrangement beats the longer input,
        // so nothing merges; the contained phrase then falls to
        // subphrase removal.
        let out = merge(&["grote storm nadert snel", "storm nadert"]);
        assert_eq!(out, vec!["grote storm nadert snel"]);
    }

    #[test]
    fn weak_two_word_phrases_are_dropped() {
        let out = merge(&["de ei", "grote overstroming"]);
        assert_eq!(out, vec!["grote overstroming"]);
    }

    #[test]
    fn merged_phrases_keep_original_casing() {
        let out = merge(&[
            "Nieuwe Maatregelen voor de Economie",
            "maatregelen voor de economie Vandaag",
        ]);
        assert_eq!(out, vec!["Nieuwe Maatregelen voor de Economie Vandaag"]);
    }

    #[test]
    fn nested_phrases_are_removed() {
        let out = merge(&[
            "kabinet valt over migratiebeleid vandaag",
            "valt over migratiebeleid",
        ]);
        assert_eq!(out, vec!["kabinet valt over migratiebeleid vandaag"]);
    }

    #[test]
    fn partial_word_match_is_not_nesting() {
        let out = remove_subphrases(vec![
            "de economie groeit hard".to_string(),
            "economie groei".to_string(),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(merge(&[]).is_empty());
    }
}
