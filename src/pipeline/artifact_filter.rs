//! Detection of transcriber prompt bleed-through.
//!
//! Speech models occasionally echo their own priming prompt into the
//! output, or get stuck repeating a phrase. Both show up as segments
//! that look like text but carry no broadcast content. This filter
//! recognizes them so the merger never sees them.

use crate::defaults;
use std::collections::HashMap;

/// Literal prompt fragments that identify echoed priming text.
/// Lowercase; matched by substring against the lowercased segment.
const PROMPT_FRAGMENTS: &[&str] = &[
    "deze transcriptie moet alle belangrijke woorden en zinnen bevatten",
    "maar muziekteksten en jingles kunnen worden overgeslagen",
    "transcriptie moet alle belangrijke woorden en zinnen bevatten",
    "muziekteksten en jingles kunnen worden overgeslagen",
    "transcriptie",
    "whisper",
    "openai",
    "alle belangrijke woorden",
    "zinnen bevatten",
    "muziekteksten en jingles",
    "kunnen worden overgeslagen",
    "radio-uitzending",
    "nieuws discussies interviews",
    "focus op spraak",
    "niet op muziek",
    "belangrijke woorden en zinnen",
];

/// Looser phrasings that still indicate prompt echo rather than speech.
const SUSPICIOUS_PATTERNS: &[&str] = &[
    "deze transcriptie",
    "transcriptie moet",
    "belangrijke woorden",
    "overgeslagen",
    "nederlandse radio-uitzending",
    "radio-uitzending met nieuws",
    "discussies interviews en gesprekken",
    "focus op spraak en gesprekken",
    "transcriptie moet alle belangrijke",
    "woorden en zinnen bevatten",
    "maar muziekteksten en jingles",
];

/// Recognizes transcription artifacts by their text.
///
/// The pattern lists are configuration: the built-in defaults match the
/// Dutch priming prompt, and tests supply their own. Patterns are stored
/// lowercased and matched by substring against the lowercased input.
#[derive(Debug, Clone)]
pub struct ArtifactFilter {
    prompt_fragments: Vec<String>,
    suspicious_patterns: Vec<String>,
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self::new(
            PROMPT_FRAGMENTS.iter().copied(),
            SUSPICIOUS_PATTERNS.iter().copied(),
        )
    }
}

impl ArtifactFilter {
    pub fn new<I, J>(fragments: I, suspicious: J) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let clean = |s: &str| s.trim().to_lowercase();
        Self {
            prompt_fragments: fragments
                .into_iter()
                .map(|f| clean(f.as_ref()))
                .filter(|f| !f.is_empty())
                .collect(),
            suspicious_patterns: suspicious
                .into_iter()
                .map(|p| clean(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether a segment text is a transcription artifact rather than speech.
    ///
    /// Matches the configured prompt fragments, then falls back to
    /// structural checks for the stuck-decoder failure mode: a meaningful
    /// word (over 3 chars) repeating more than 3 times, a short phrase
    /// recurring within one segment, or a 20-char sequence repeating more
    /// than twice in a long (over 100 chars) segment.
    pub fn is_artifact(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let lower = trimmed.to_lowercase();

        if self.prompt_fragments.iter().any(|f| lower.contains(f)) {
            return true;
        }
        if self.suspicious_patterns.iter().any(|p| lower.contains(p)) {
            return true;
        }

        let words: Vec<&str> = lower.split_whitespace().collect();

        // A three-word phrase showing up twice inside a single segment is a
        // decoder loop, not natural speech.
        if words.len() > 3 && lower.replace(' ', "").chars().count() > 20 {
            for window in words.windows(3) {
                let phrase = window.join(" ");
                if phrase.len() > 10 && lower.matches(&phrase).count() > 1 {
                    return true;
                }
            }
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            if word.chars().count() > defaults::REPEAT_WORD_MIN_LEN {
                let n = counts.entry(word).or_insert(0);
                *n += 1;
                if *n > defaults::MAX_WORD_REPEATS {
                    return true;
                }
            }
        }

        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() > defaults::LONG_TEXT_LEN {
            let full: String = chars.iter().collect();
            for window in chars.windows(defaults::REPEAT_WINDOW_LEN) {
                let seq: String = window.iter().collect();
                if full.matches(&seq).count() > 2 {
                    return true;
                }
            }
        }

        false
    }
}
