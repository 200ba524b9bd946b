//! Candidate normalization and the frequency-based extractor.
//!
//! Candidates reach the pipeline from two places: an external keyword
//! model that scores phrases, or the local frequency extractor that
//! counts them. Both are flattened into `Candidate` here so no later
//! stage has to care which one ran.

use crate::defaults;
use crate::pipeline::types::Candidate;
use crate::stopwords::Stopwords;
use std::collections::HashMap;

/// Candidate lists as they arrive from either extraction strategy.
#[derive(Debug, Clone)]
pub enum RawCandidates {
    /// (phrase, relevance score) pairs from an external keyword model.
    Scored(Vec<(String, f64)>),
    /// (phrase, occurrence count) pairs from the frequency extractor.
    Frequency(Vec<(String, usize)>),
}

impl RawCandidates {
    pub fn len(&self) -> usize {
        match self {
            RawCandidates::Scored(v) => v.len(),
            RawCandidates::Frequency(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flatten raw candidates into the common shape. Occurrence counts
/// become scores as-is. Entries with empty or whitespace-only text are
/// dropped, as are scored entries with a non-finite score.
pub fn normalize_candidates(raw: RawCandidates) -> Vec<Candidate> {
    match raw {
        RawCandidates::Scored(pairs) => pairs
            .into_iter()
            .filter(|(text, score)| !text.trim().is_empty() && score.is_finite())
            .map(|(text, score)| Candidate::new(text.trim(), score))
            .collect(),
        RawCandidates::Frequency(pairs) => pairs
            .into_iter()
            .filter(|(text, _)| !text.trim().is_empty())
            .map(|(text, count)| Candidate::new(text.trim(), count as f64))
            .collect(),
    }
}

/// Frequency-based candidate extraction over the merged transcript.
///
/// Runs when the external model produced nothing, or too little. Counts
/// single words plus sentence-local n-grams of 2 to 5 words, each length
/// with its own stopword ceiling so that longer phrases are favored but
/// not required to be stopword-free.
pub struct FrequencyExtractor<'a> {
    stopwords: &'a Stopwords,
}

impl<'a> FrequencyExtractor<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self { stopwords }
    }

    /// Extract (term, count) pairs from the transcript, most frequent
    /// first. Falls back to progressively looser word filters when the
    /// normal path yields nothing, so a non-empty transcript never
    /// produces an empty list.
    pub fn extract(&self, transcript: &str) -> Vec<(String, usize)> {
        let lower = transcript.to_lowercase();
        let words = tokenize(&lower);

        let mut terms: Vec<String> = words
            .iter()
            .filter(|w| !self.stopwords.contains(w) && w.chars().count() > 3)
            .map(|w| w.to_string())
            .collect();

        for sentence in lower.split(['.', '!', '?']) {
            let sw = tokenize(sentence);
            if sw.len() < 2 {
                continue;
            }
            self.collect_ngrams(&sw, &mut terms);
        }

        let mut counted = count_terms(terms);

        if counted.is_empty() {
            let loose: Vec<String> = words
                .iter()
                .filter(|w| !self.stopwords.contains(w) && w.chars().count() > 2)
                .map(|w| w.to_string())
                .collect();
            counted = count_terms(loose);
            counted.truncate(20);
        }

        if counted.is_empty() {
            // Last resort: frequency alone, stopwords and all.
            let any: Vec<String> = words
                .iter()
                .filter(|w| w.chars().count() > 3)
                .map(|w| w.to_string())
                .collect();
            counted = count_terms(any);
            counted.truncate(15);
        }

        counted
    }

    fn collect_ngrams(&self, words: &[&str], out: &mut Vec<String>) {
        // 5-word phrases: at most 2 stopwords and at least 3 substantial
        // non-stopwords.
        for window in words.windows(5) {
            let non_stop: Vec<&&str> = window.iter().filter(|w| !self.stopwords.contains(w)).collect();
            if window.len() - non_stop.len() <= 2
                && non_stop.len() >= 3
                && non_stop.iter().all(|w| w.chars().count() >= 3)
            {
                out.push(window.join(" "));
            }
        }
        // 4-word phrases: at most 3 stopwords, non-stopwords of 2+ chars.
        for window in words.windows(4) {
            let non_stop: Vec<&&str> = window.iter().filter(|w| !self.stopwords.contains(w)).collect();
            if window.len() - non_stop.len() <= 3
                && !non_stop.is_empty()
                && non_stop.iter().all(|w| w.chars().count() >= 2)
            {
                out.push(window.join(" "));
            }
        }
        // 3-word phrases: at most 2 stopwords.
        for window in words.windows(3) {
            let non_stop: Vec<&&str> = window.iter().filter(|w| !self.stopwords.contains(w)).collect();
            if window.len() - non_stop.len() <= 2
                && !non_stop.is_empty()
                && non_stop.iter().all(|w| w.chars().count() >= 2)
            {
                out.push(window.join(" "));
            }
        }
        // 2-word phrases: at most 1 stopword and a meaningful non-stopword.
        for window in words.windows(2) {
            let stop_count = window.iter().filter(|w| self.stopwords.contains(w)).count();
            if stop_count <= 1 {
                let non_stop = if self.stopwords.contains(window[0]) {
                    window[1]
                } else {
                    window[0]
                };
                if non_stop.chars().count() >= defaults::REPEAT_WORD_MIN_LEN {
                    out.push(window.join(" "));
                }
            }
        }
    }
}

/// Split on non-alphanumeric characters, keeping only non-empty tokens.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Count terms, ordering the result by count descending and then by
/// first occurrence, so ties resolve deterministically.
fn count_terms(terms: Vec<String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, term) in terms.into_iter().enumerate() {
        let entry = counts.entry(term).or_insert((0, idx));
        entry.0 += 1;
    }
    let mut ordered: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ordered.into_iter().map(|(term, count, _)| (term, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::Stopwords;

    #[test]
    fn scored_candidates_pass_through() {
        let raw = RawCandidates::Scored(vec![
            ("economie".into(), 0.8),
            ("  ".into(), 0.9),
            ("nieuwe wet".into(), f64::NAN),
        ]);
        let out = normalize_candidates(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "economie");
        assert_eq!(out[0].score, 0.8);
    }

    #[test]
    fn frequency_counts_become_scores() {
        let raw = RawCandidates::Frequency(vec![("verkiezingen".into(), 4), ("".into(), 2)]);
        let out = normalize_candidates(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].score, 4.0);
    }

    #[test]
    fn frequent_word_ranks_first() {
        let sw = Stopwords::from_words(["de", "het", "een", "en"]);
        let extractor = FrequencyExtractor::new(&sw);
        let out = extractor.extract(
            "de economie groeit. de economie herstelt. de economie bloeit. het regent.",
        );
        assert!(!out.is_empty());
        assert_eq!(out[0].0, "economie");
        assert_eq!(out[0].1, 3);
    }

    #[test]
    fn ngrams_stay_within_sentences() {
        let sw = Stopwords::from_words(["de"]);
        let extractor = FrequencyExtractor::new(&sw);
        let out = extractor.extract("grote storm komt. morgen zonnig weer.");
        assert!(out.iter().all(|(t, _)| !t.contains("komt morgen")));
    }

    #[test]
    fn all_stopword_phrases_are_not_generated() {
        let sw = Stopwords::from_words(["de", "van", "het"]);
        let extractor = FrequencyExtractor::new(&sw);
        let out = extractor.extract("de van het de van het");
        assert!(out.iter().all(|(t, _)| !t.contains(' ')));
    }

    #[test]
    fn loose_fallback_keeps_three_char_words() {
        // Nothing passes the >3 char filter, so the looser pass runs.
        let sw = Stopwords::from_words(["de"]);
        let extractor = FrequencyExtractor::new(&sw);
        let out = extractor.extract("wet. wet. wet.");
        assert_eq!(out, vec![("wet".to_string(), 3)]);
    }

    #[test]
    fn empty_transcript_yields_nothing() {
        let sw = Stopwords::dutch();
        let extractor = FrequencyExtractor::new(&sw);
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("...").is_empty());
    }
}
