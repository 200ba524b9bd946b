//! End-to-end consolidation of a transcript into ranked keypoints.
//!
//! Wires the stages together and owns the exhaustion policy: when the
//! strict Dutch stopword filter starves the pipeline, filtering is
//! retried with the basic stopword set, and as a last step the
//! best-scored unfiltered candidates are accepted. A transcript never
//! produces an error; at worst the keypoint list is empty.

use crate::config::Config;
use crate::defaults;
use crate::music::MusicScreen;
use crate::pipeline::artifact_filter::ArtifactFilter;
use crate::pipeline::candidates::{normalize_candidates, FrequencyExtractor, RawCandidates};
use crate::pipeline::finalize::finalize;
use crate::pipeline::phrase_merger::PhraseMerger;
use crate::pipeline::segment_merger::SegmentMerger;
use crate::pipeline::stopword_filter::StopwordFilter;
use crate::pipeline::types::{Candidate, Keypoint, Segment};
use crate::stopwords::Stopwords;
use std::fmt;

/// How far down the exhaustion ladder a run had to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackLevel {
    /// Full Dutch stopword filtering produced enough candidates.
    #[default]
    None,
    /// Re-filtered with the basic stopword set.
    BasicStopwords,
    /// Accepted top-scored candidates with minimal filtering.
    LowScored,
}

/// Per-run counters, reported by the CLI under verbose output.
#[derive(Debug, Clone, Default)]
pub struct ConsolidationStats {
    pub input_segments: usize,
    pub merged_segments: usize,
    pub music_segments: usize,
    pub raw_candidates: usize,
    pub filtered_candidates: usize,
    pub merged_phrases: usize,
    pub keypoints: usize,
    pub used_frequency_fallback: bool,
    pub fallback_level: FallbackLevel,
}

impl fmt::Display for ConsolidationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "segments: {} in, {} merged ({} music)", self.input_segments, self.merged_segments, self.music_segments)?;
        writeln!(
            f,
            "candidates: {} raw, {} filtered, {} after phrase merge{}",
            self.raw_candidates,
            self.filtered_candidates,
            self.merged_phrases,
            if self.used_frequency_fallback {
                " (frequency fallback)"
            } else {
                ""
            },
        )?;
        if self.fallback_level != FallbackLevel::None {
            writeln!(f, "fallback level: {:?}", self.fallback_level)?;
        }
        write!(f, "keypoints: {}", self.keypoints)
    }
}

/// The result of one consolidation run.
#[derive(Debug, Clone)]
pub struct Consolidation {
    pub keypoints: Vec<Keypoint>,
    /// The merged, artifact-free segments the keypoints were looked up
    /// in. The report prints these as the transcript.
    pub merged_segments: Vec<Segment>,
    pub stats: ConsolidationStats,
}

pub struct Consolidator {
    config: Config,
    stopwords: Stopwords,
    basic_stopwords: Stopwords,
    artifacts: ArtifactFilter,
}

impl Consolidator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stopwords: Stopwords::dutch(),
            basic_stopwords: Stopwords::basic(),
            artifacts: ArtifactFilter::default(),
        }
    }

    /// Consolidate a transcript into ranked keypoints.
    ///
    /// `external` carries candidates from an external keyword model, if
    /// any. When they are absent or number fewer than
    /// `filter.min_candidates`, candidates are extracted locally by
    /// frequency instead.
    pub fn consolidate(
        &self,
        segments: &[Segment],
        external: Option<RawCandidates>,
    ) -> Consolidation {
        let mut stats = ConsolidationStats {
            input_segments: segments.len(),
            ..Default::default()
        };

        let merger = SegmentMerger::with_artifact_filter(
            self.config.merge.similarity_threshold,
            self.config.merge.text_merge_threshold,
            self.artifacts.clone(),
        );
        let merged = merger.merge(segments);
        stats.merged_segments = merged.len();

        let raw = match external {
            Some(raw) if raw.len() >= self.config.filter.min_candidates => raw,
            _ => {
                stats.used_frequency_fallback = true;
                RawCandidates::Frequency(self.extract_by_frequency(&merged, &mut stats))
            }
        };
        let candidates = normalize_candidates(raw);
        stats.raw_candidates = candidates.len();

        let (level, filtered) = self.filter_with_ladder(&candidates);
        stats.fallback_level = level;
        stats.filtered_candidates = filtered.len();

        let (words, phrases): (Vec<Candidate>, Vec<Candidate>) =
            filtered.into_iter().partition(|c| !c.is_phrase());

        // The phrase merger judges standalone phrases against the same
        // stopword set the winning ladder rung filtered with.
        let merge_stopwords = match level {
            FallbackLevel::BasicStopwords => &self.basic_stopwords,
            _ => &self.stopwords,
        };
        let phrase_texts: Vec<String> = phrases.into_iter().map(|c| c.text).collect();
        let merged_phrases =
            PhraseMerger::with_overlap_ratio(merge_stopwords, self.config.filter.min_overlap_ratio)
                .merge(&phrase_texts);
        stats.merged_phrases = merged_phrases.len();

        let mut final_texts: Vec<String> = words.into_iter().map(|c| c.text).collect();
        final_texts.extend(merged_phrases);

        let keypoints = finalize(
            &final_texts,
            &merged,
            &self.artifacts,
            self.config.output.max_words,
            self.config.output.max_phrases,
        );
        stats.keypoints = keypoints.len();

        Consolidation {
            keypoints,
            merged_segments: merged,
            stats,
        }
    }

    /// Count words and n-grams over the merged transcript, leaving out
    /// segments that score as music when configured to.
    fn extract_by_frequency(
        &self,
        merged: &[Segment],
        stats: &mut ConsolidationStats,
    ) -> Vec<(String, usize)> {
        let screen = MusicScreen::new(&self.stopwords);
        let mut speech = Vec::new();
        for seg in merged {
            if self.config.filter.filter_music && screen.is_music(&seg.text) {
                stats.music_segments += 1;
            } else {
                speech.push(seg.text.as_str());
            }
        }
        let transcript = speech.join(". ");
        FrequencyExtractor::new(&self.stopwords).extract(&transcript)
    }

    /// Filter candidates, stepping down the ladder while the yield is
    /// too thin to report on.
    fn filter_with_ladder(&self, candidates: &[Candidate]) -> (FallbackLevel, Vec<Candidate>) {
        let strict = StopwordFilter::with_balance(
            &self.stopwords,
            self.config.filter.two_word_cap,
            self.config.filter.balance_threshold,
        )
        .filter(candidates);
        if self.is_sufficient(&strict) {
            return (FallbackLevel::None, strict);
        }

        let basic = StopwordFilter::with_balance(
            &self.basic_stopwords,
            self.config.filter.two_word_cap,
            self.config.filter.balance_threshold,
        )
        .filter(candidates);
        if self.is_sufficient(&basic) {
            return (FallbackLevel::BasicStopwords, basic);
        }

        // Last rung: take the best-scored candidates as they are, still
        // refusing all-stopword phrases, and keep whichever rung gave
        // the most.
        let mut by_score: Vec<Candidate> = candidates
            .iter()
            .filter(|c| {
                c.text
                    .split_whitespace()
                    .any(|w| !self.stopwords.contains(w))
            })
            .cloned()
            .collect();
        by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        by_score.truncate(defaults::FALLBACK_PHRASE_LIMIT);

        if by_score.len() > basic.len() {
            (FallbackLevel::LowScored, by_score)
        } else if basic.len() > strict.len() {
            (FallbackLevel::BasicStopwords, basic)
        } else {
            (FallbackLevel::None, strict)
        }
    }

    fn is_sufficient(&self, filtered: &[Candidate]) -> bool {
        let phrases = filtered.iter().filter(|c| c.is_phrase()).count();
        let words = filtered.len() - phrases;
        phrases >= self.config.filter.min_phrases || words >= self.config.filter.min_words
    }
}
