//! Default configuration constants for keypunt.
//!
//! Every heuristic threshold in the pipeline lives here under one name,
//! so behavior is centrally tunable and testable in isolation.

/// Default similarity threshold for merging near-duplicate segments.
///
/// The upstream transcriber frequently repeats a sentence across chunk
/// boundaries; 0.4 is lenient enough to catch partial repeats while
/// leaving genuinely different sentences alone.
pub const SIMILARITY_THRESHOLD: f64 = 0.4;

/// Similarity score assigned when one normalized text is a substring of the other.
pub const SUBSTRING_SIMILARITY: f64 = 0.9;

/// Bonus added to Jaccard similarity when two texts share a contiguous
/// run of at least [`MIN_BONUS_RUN`] words.
pub const RUN_BONUS: f64 = 0.2;

/// Minimum contiguous word run that triggers the similarity bonus.
pub const MIN_BONUS_RUN: usize = 3;

/// Similarity above which a group member's text is considered redundant
/// with the merge base and not appended to the merged text.
pub const TEXT_MERGE_SIMILARITY: f64 = 0.8;

/// A word longer than this many characters appearing more than
/// [`MAX_WORD_REPEATS`] times marks the text as a transcription artifact.
pub const REPEAT_WORD_MIN_LEN: usize = 3;

/// Maximum times a substantial word may repeat before the text is an artifact.
pub const MAX_WORD_REPEATS: usize = 3;

/// Texts longer than this are scanned for repeated character sequences.
pub const LONG_TEXT_LEN: usize = 100;

/// Length of the character window used for the repeated-sequence probe.
pub const REPEAT_WINDOW_LEN: usize = 20;

/// Minimum contiguous word overlap for merging two phrases.
pub const MIN_MERGE_RUN: usize = 2;

/// Minimum overlap when both phrases are long ([`LONG_PHRASE_WORDS`]+ words).
pub const MIN_MERGE_RUN_LONG: usize = 3;

/// Word count at which a phrase counts as "long" for merge purposes.
pub const LONG_PHRASE_WORDS: usize = 5;

/// The shared run must cover at least this fraction of the shorter phrase.
pub const MIN_OVERLAP_RATIO: f64 = 0.4;

/// Maximum share of 2-word phrases in the surviving set after balancing.
pub const TWO_WORD_CAP: f64 = 0.35;

/// Balancing only kicks in when more than this many phrases survive filtering.
pub const BALANCE_THRESHOLD: usize = 20;

/// Fewer externally supplied candidates than this triggers the local
/// frequency-based extractor.
pub const MIN_CANDIDATES: usize = 15;

/// Fewer surviving phrases than this triggers the basic-stopword fallback.
pub const MIN_PHRASES: usize = 10;

/// Fewer surviving words than this triggers the basic-stopword fallback.
pub const MIN_WORDS: usize = 5;

/// Phrases accepted straight from the candidate list when both stopword
/// passes come up short.
pub const FALLBACK_PHRASE_LIMIT: usize = 30;

/// Default word budget in the final keypoint set.
pub const MAX_WORDS: usize = 20;

/// Default phrase budget in the final keypoint set.
pub const MAX_PHRASES: usize = 35;

/// Music pattern score at or above which a segment is treated as music.
pub const MUSIC_SCORE_THRESHOLD: u32 = 3;
