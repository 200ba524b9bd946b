//! Timestamp lookup, deduplication and final ranking.
//!
//! The last stage turns surviving candidate texts into keypoints: each
//! gets the start times of every merged segment that mentions it, near
//! duplicates are folded together, and the result is ranked and cut to
//! the report budgets.

use crate::pipeline::artifact_filter::ArtifactFilter;
use crate::pipeline::types::{normalize, word_count, Keypoint, KeypointKind, Segment};

/// Build ranked keypoints from candidate texts.
///
/// A candidate that is itself a transcription artifact, or that no
/// segment mentions, is dropped outright. The
/// output lists words first (most mentioned first), then phrases
/// (most words first, mentions breaking ties), truncated to the two
/// budgets.
pub fn finalize(
    candidates: &[String],
    segments: &[Segment],
    artifacts: &ArtifactFilter,
    max_words: usize,
    max_phrases: usize,
) -> Vec<Keypoint> {
    let mut keypoints = Vec::new();
    for text in candidates {
        if artifacts.is_artifact(text) {
            continue;
        }
        let timestamps = lookup_timestamps(text, segments);
        if timestamps.is_empty() {
            continue;
        }
        keypoints.push(Keypoint::new(text, timestamps));
    }

    let deduped = deduplicate(keypoints);

    let (mut words, mut phrases): (Vec<Keypoint>, Vec<Keypoint>) = deduped
        .into_iter()
        .partition(|k| k.kind == KeypointKind::Word);

    words.sort_by(|a, b| b.mentions().cmp(&a.mentions()));
    words.truncate(max_words);

    phrases.sort_by(|a, b| {
        word_count(&b.canonical_text)
            .cmp(&word_count(&a.canonical_text))
            .then(b.mentions().cmp(&a.mentions()))
    });
    phrases.truncate(max_phrases);

    words.extend(phrases);
    words
}

/// Start times of every segment whose text mentions the candidate,
/// case-insensitively.
pub fn lookup_timestamps(text: &str, segments: &[Segment]) -> Vec<f64> {
    let needle = text.to_lowercase();
    if needle.trim().is_empty() {
        return Vec::new();
    }
    segments
        .iter()
        .filter(|seg| seg.text.to_lowercase().contains(&needle))
        .map(|seg| seg.start)
        .collect()
}

/// Fold keypoints whose normalized texts are identical or nested.
///
/// The longer original text wins; its timestamps come first, followed by
/// the folded entry's, repeats and order preserved. Each fold re-enters
/// the merged entry, so chains like "a" ⊂ "a b" ⊂ "a b c" collapse in
/// one call no matter the input order.
pub fn deduplicate(keypoints: Vec<Keypoint>) -> Vec<Keypoint> {
    let mut retained: Vec<Keypoint> = Vec::new();
    for kp in keypoints {
        insert(&mut retained, kp);
    }
    retained
}

fn insert(retained: &mut Vec<Keypoint>, kp: Keypoint) {
    let norm = normalize(&kp.canonical_text);
    let matched = retained.iter().position(|r| {
        let r_norm = normalize(&r.canonical_text);
        r_norm == norm || r_norm.contains(&norm) || norm.contains(&r_norm)
    });

    match matched {
        None => retained.push(kp),
        Some(idx) => {
            let existing = retained.remove(idx);
            // Longer text survives; on a tie the earlier entry does.
            let (mut kept, folded) = if kp.canonical_text.len() > existing.canonical_text.len() {
                (kp, existing)
            } else {
                (existing, kp)
            };
            kept.timestamps.extend(folded.timestamps);
            insert(retained, kept);
        }
    }
}
