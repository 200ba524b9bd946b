//! Data types flowing through the consolidation pipeline.

use serde::{Deserialize, Serialize};

/// One timestamped chunk of recognized speech, as produced by the external
/// transcriber. Timestamps are seconds from the start of the recording,
/// already adjusted for chunking. Segments are consumed, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start of the segment in seconds.
    #[serde(default)]
    pub start: f64,
    /// End of the segment in seconds.
    #[serde(default)]
    pub end: f64,
    /// Recognized text. May be empty for silent sub-chunks; the pipeline
    /// skips such segments rather than erroring.
    #[serde(default)]
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A scored word or phrase proposed by an extraction strategy, prior to
/// filtering. Entries with an internal space are phrases; the rest are words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    /// Relevance score; higher is more relevant. The scale depends on the
    /// source (model score or occurrence count) and is only used for
    /// relative ordering.
    pub score: f64,
}

impl Candidate {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Phrases contain at least one internal space; words contain none.
    pub fn is_phrase(&self) -> bool {
        self.text.trim().contains(' ')
    }
}

/// Whether a keypoint is a single word or a multi-word phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeypointKind {
    Word,
    Phrase,
}

/// A final, deduplicated, timestamped word or phrase, the pipeline's sole
/// externally visible artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// The surviving surface form (the longest variant among merged duplicates).
    pub canonical_text: String,
    pub kind: KeypointKind,
    /// Segment start times at which the keypoint occurs. Never empty;
    /// repeated timestamps are preserved as evidence of repeated mention.
    pub timestamps: Vec<f64>,
}

impl Keypoint {
    /// Build a keypoint, deriving `kind` from the text so the kind
    /// invariant holds by construction.
    pub fn new(canonical_text: impl Into<String>, timestamps: Vec<f64>) -> Self {
        let canonical_text = canonical_text.into();
        let kind = if canonical_text.contains(' ') {
            KeypointKind::Phrase
        } else {
            KeypointKind::Word
        };
        Self {
            canonical_text,
            kind,
            timestamps,
        }
    }

    /// Number of times the keypoint was mentioned.
    pub fn mentions(&self) -> usize {
        self.timestamps.len()
    }
}

/// Lowercase and collapse internal whitespace, the normalization used for
/// all text-equality decisions in the pipeline.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-delimited words in a text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_phrase_detection() {
        assert!(Candidate::new("nieuwe maatregelen", 0.5).is_phrase());
        assert!(!Candidate::new("economie", 0.5).is_phrase());
    }

    #[test]
    fn keypoint_kind_follows_text() {
        let word = Keypoint::new("economie", vec![1.0]);
        assert_eq!(word.kind, KeypointKind::Word);

        let phrase = Keypoint::new("nieuwe maatregelen", vec![1.0]);
        assert_eq!(phrase.kind, KeypointKind::Phrase);
    }

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("  Het   Weer \t Morgen "), "het weer morgen");
    }

    #[test]
    fn segment_deserializes_with_missing_fields() {
        let seg: Segment = serde_json::from_str(r#"{"text": "hallo"}"#).unwrap();
        assert_eq!(seg.start, 0.0);
        assert_eq!(seg.end, 0.0);
        assert_eq!(seg.text, "hallo");
    }

    #[test]
    fn word_count_ignores_extra_spaces() {
        assert_eq!(word_count("  de  nieuwe   maatregelen "), 3);
    }
}
