//! Music detection for Dutch radio transcripts.
//!
//! Song lyrics and jingle fragments pollute frequency-based candidate
//! extraction, so segments that score as music are excluded from the
//! fallback transcript. They stay in the segment list for timestamp
//! lookup.

use crate::defaults;
use crate::stopwords::Stopwords;
use std::collections::HashMap;

/// Strong signals: words that mostly occur when a track or jingle is
/// being named or sung. Each match scores 2.
const SONG_TITLE_PATTERNS: &[&str] = &[
    "intro", "outro", "jingle", "theme", "song", "lied", "nummer", "hit", "single", "album",
    "artiest", "zanger", "zangeres", "band", "groep", "muziek", "melodie", "ritme", "beat",
    "refrein", "couplet", "bridge", "solo", "instrumentaal", "acapella", "karaoke",
];

/// Weaker signals: music vocabulary that also shows up in regular talk
/// about music. Each match scores 1.
const MUSIC_INDICATOR_PATTERNS: &[&str] = &[
    "speelt", "zingt", "zong", "gezongen", "gespeeld", "muziek", "melodie", "ritme",
    "instrumenten", "gitaar", "piano", "drums", "bas", "viool", "trompet", "saxofoon",
    "orkest", "koor", "ensemble", "concert", "optreden", "festival", "muziekwinkel",
];

pub struct MusicScreen<'a> {
    stopwords: &'a Stopwords,
    threshold: u32,
}

impl<'a> MusicScreen<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self {
            stopwords,
            threshold: defaults::MUSIC_SCORE_THRESHOLD,
        }
    }

    pub fn is_music(&self, text: &str) -> bool {
        self.score(text) >= self.threshold
    }

    /// Music score for a segment text. Pattern matches accumulate, and
    /// short segments (11 to 49 words) where a substantial word repeats
    /// more than 3 times add a point per such word, the lyric-chorus
    /// signature.
    pub fn score(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        let mut score = 0u32;

        for pattern in SONG_TITLE_PATTERNS {
            if lower.contains(pattern) {
                score += 2;
            }
        }
        for pattern in MUSIC_INDICATOR_PATTERNS {
            if lower.contains(pattern) {
                score += 1;
            }
        }

        let words: Vec<&str> = lower.split_whitespace().collect();
        if words.len() > 10 && words.len() < 50 {
            let mut counts: HashMap<&str, u32> = HashMap::new();
            for word in &words {
                if !self.stopwords.contains(word) && word.chars().count() > 2 {
                    *counts.entry(word).or_insert(0) += 1;
                }
            }
            score += counts.values().filter(|&&c| c > 3).count() as u32;
        }

        score
    }
}
