//! Content-based merging of near-duplicate segments.
//!
//! Overlapping transcription windows recognize the same sentence more
//! than once, usually with slightly different wording. This stage
//! collapses each cluster of similar segments into one, keeping the
//! earliest start and latest end of the cluster.

use crate::defaults;
use crate::pipeline::artifact_filter::ArtifactFilter;
use crate::pipeline::similarity::similarity;
use crate::pipeline::types::Segment;

pub struct SegmentMerger {
    similarity_threshold: f64,
    text_merge_threshold: f64,
    artifacts: ArtifactFilter,
}

impl Default for SegmentMerger {
    fn default() -> Self {
        Self::new(
            defaults::SIMILARITY_THRESHOLD,
            defaults::TEXT_MERGE_SIMILARITY,
        )
    }
}

impl SegmentMerger {
    pub fn new(similarity_threshold: f64, text_merge_threshold: f64) -> Self {
        Self::with_artifact_filter(
            similarity_threshold,
            text_merge_threshold,
            ArtifactFilter::default(),
        )
    }

    pub fn with_artifact_filter(
        similarity_threshold: f64,
        text_merge_threshold: f64,
        artifacts: ArtifactFilter,
    ) -> Self {
        Self {
            similarity_threshold,
            text_merge_threshold,
            artifacts,
        }
    }

    /// Merge similar segments, dropping empty and artifact segments first.
    ///
    /// Grouping is greedy over the input order: each not-yet-grouped
    /// segment seeds a cluster and absorbs every later segment whose
    /// similarity to the seed meets the threshold. Timestamps are not
    /// consulted for grouping; a repeated news item hours apart still
    /// merges.
    pub fn merge(&self, segments: &[Segment]) -> Vec<Segment> {
        let valid: Vec<&Segment> = segments
            .iter()
            .filter(|s| !s.text.trim().is_empty() && !self.artifacts.is_artifact(&s.text))
            .collect();

        let mut taken = vec![false; valid.len()];
        let mut merged = Vec::new();

        for i in 0..valid.len() {
            if taken[i] {
                continue;
            }
            taken[i] = true;
            let mut cluster = vec![valid[i]];

            for j in (i + 1)..valid.len() {
                if taken[j] {
                    continue;
                }
                if similarity(&valid[i].text, &valid[j].text) >= self.similarity_threshold {
                    taken[j] = true;
                    cluster.push(valid[j]);
                }
            }

            if cluster.len() == 1 {
                merged.push(cluster[0].clone());
            } else {
                let start = cluster
                    .iter()
                    .map(|s| s.start)
                    .fold(f64::INFINITY, f64::min);
                let end = cluster
                    .iter()
                    .map(|s| s.end)
                    .fold(f64::NEG_INFINITY, f64::max);
                let texts: Vec<&str> = cluster.iter().map(|s| s.text.as_str()).collect();
                merged.push(Segment::new(start, end, self.merge_texts(&texts)));
            }
        }

        merged
    }

    /// Combine cluster texts into one. The longest text is the base;
    /// other texts are appended only when they are neither a substring
    /// of the base nor at least 0.8-similar to it.
    fn merge_texts(&self, texts: &[&str]) -> String {
        let unique: Vec<&str> = texts
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();

        let Some(base) = unique.iter().max_by_key(|t| t.len()).copied() else {
            return String::new();
        };

        let mut parts = vec![base];
        for text in &unique {
            if *text == base {
                continue;
            }
            if !self.is_redundant(text, base) {
                parts.push(text);
            }
        }

        parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn is_redundant(&self, text: &str, base: &str) -> bool {
        let text_lower = text.to_lowercase();
        let base_lower = base.to_lowercase();
        if base_lower.contains(&text_lower) || text_lower.contains(&base_lower) {
            return true;
        }
        similarity(text, base) >= self.text_merge_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment::new(start, end, text)
    }

    #[test]
    fn near_duplicates_collapse_to_one() {
        let merger = SegmentMerger::default();
        let out = merger.merge(&[
            seg(0.0, 5.0, "het weer wordt zonnig"),
            seg(5.0, 10.0, "het weer wordt zonnig en warm"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "het weer wordt zonnig en warm");
        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[0].end, 10.0);
    }

    #[test]
    fn dissimilar_segments_stay_apart() {
        let merger = SegmentMerger::default();
        let out = merger.merge(&[
            seg(0.0, 5.0, "de minister kondigde maatregelen aan"),
            seg(5.0, 10.0, "het verkeer staat vast op de ringweg"),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn repeats_far_apart_in_time_still_merge() {
        let merger = SegmentMerger::default();
        let out = merger.merge(&[
            seg(0.0, 4.0, "de economie groeit dit jaar"),
            seg(100.0, 104.0, "iets heel anders over sport"),
            seg(3600.0, 3604.0, "de economie groeit dit jaar flink"),
        ]);
        assert_eq!(out.len(), 2);
        let merged = out.iter().find(|s| s.text.contains("economie")).unwrap();
        assert_eq!(merged.start, 0.0);
        assert_eq!(merged.end, 3604.0);
    }

    #[test]
    fn empty_and_artifact_segments_are_dropped() {
        let merger = SegmentMerger::default();
        let out = merger.merge(&[
            seg(0.0, 1.0, "   "),
            seg(1.0, 2.0, "deze transcriptie moet alle belangrijke woorden en zinnen bevatten"),
            seg(2.0, 3.0, "echt nieuws over de verkiezingen"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "echt nieuws over de verkiezingen");
    }

    #[test]
    fn substring_cluster_text_is_not_repeated() {
        let merger = SegmentMerger::default();
        let out = merger.merge(&[
            seg(0.0, 5.0, "nieuwe maatregelen voor de economie aangekondigd"),
            seg(5.0, 10.0, "maatregelen voor de economie"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "nieuwe maatregelen voor de economie aangekondigd");
    }

    #[test]
    fn non_redundant_cluster_text_is_appended() {
        let merger = SegmentMerger::default();
        // Similar enough to cluster (0.5 Jaccard plus the run bonus) but
        // neither a substring nor above the redundancy threshold of 0.8.
        let out = merger.merge(&[
            seg(0.0, 5.0, "nieuwe maatregelen voor de economie aangekondigd"),
            seg(5.0, 10.0, "maatregelen voor de economie besproken vandaag"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].text,
            "nieuwe maatregelen voor de economie aangekondigd maatregelen voor de economie besproken vandaag"
        );
    }

    #[test]
    fn exactly_threshold_similar_text_is_redundant() {
        let merger = SegmentMerger::default();
        // Jaccard 3/5 plus the run bonus is exactly 0.8: redundant, so
        // only the base text survives.
        let out = merger.merge(&[
            seg(0.0, 5.0, "grote storm nadert snelweg"),
            seg(5.0, 10.0, "grote storm nadert kust"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "grote storm nadert snelweg");
    }

    #[test]
    fn custom_artifact_filter_is_consulted() {
        let artifacts = ArtifactFilter::new(["geheime testzin"], std::iter::empty::<&str>());
        let merger = SegmentMerger::with_artifact_filter(0.4, 0.8, artifacts);
        let out = merger.merge(&[
            seg(0.0, 1.0, "de geheime testzin hoort hier niet"),
            seg(1.0, 2.0, "echt nieuws over de verkiezingen"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "echt nieuws over de verkiezingen");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let merger = SegmentMerger::default();
        assert!(merger.merge(&[]).is_empty());
    }
}
