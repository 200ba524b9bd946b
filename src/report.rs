//! Plain-text report rendering.
//!
//! The report has two parts: the merged transcript with one
//! `[12.3s] text` line per segment, and the talking points split into
//! most-mentioned words and phrases. Sections with nothing to say get a
//! placeholder line rather than being omitted, so the reader can tell
//! "nothing found" apart from "not run".

use crate::pipeline::types::{Keypoint, KeypointKind, Segment};

/// Render the full report for a consolidated transcript.
pub fn render(segments: &[Segment], keypoints: &[Keypoint]) -> String {
    let mut out = String::new();

    out.push_str("--- Transcript ---\n");
    for seg in segments {
        out.push_str(&format!("[{:.1}s] {}\n", seg.start, seg.text.trim()));
    }

    out.push_str("\n--- Key Talking Points & Phrases ---\n");

    let words: Vec<&Keypoint> = keypoints
        .iter()
        .filter(|k| k.kind == KeypointKind::Word)
        .collect();
    let phrases: Vec<&Keypoint> = keypoints
        .iter()
        .filter(|k| k.kind == KeypointKind::Phrase)
        .collect();

    out.push_str("\nMost Mentioned Words:\n");
    if words.is_empty() {
        out.push_str("  - No significant words encountered\n");
    } else {
        for (i, kp) in words.iter().enumerate() {
            out.push_str(&format!(
                "  {:2}. {}: {}\n",
                i + 1,
                kp.canonical_text,
                format_timestamps(&kp.timestamps)
            ));
        }
    }

    out.push_str("\nMost Mentioned Phrases:\n");
    if phrases.is_empty() {
        out.push_str("  - No significant phrases encountered\n");
    } else {
        for (i, kp) in phrases.iter().enumerate() {
            out.push_str(&format!(
                "  {:2}. \"{}\": {}\n",
                i + 1,
                kp.canonical_text,
                format_timestamps(&kp.timestamps)
            ));
        }
    }

    out
}

fn format_timestamps(timestamps: &[f64]) -> String {
    timestamps
        .iter()
        .map(|t| format!("{:.1}s", t))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_transcript_and_keypoints() {
        let segments = vec![
            Segment::new(5.0, 10.0, "de economie groeit dit jaar"),
            Segment::new(40.0, 45.0, "stakingen bij het spoor"),
        ];
        let keypoints = vec![
            Keypoint::new("economie", vec![5.0]),
            Keypoint::new("stakingen bij het spoor", vec![40.0]),
        ];

        let report = render(&segments, &keypoints);

        assert!(report.contains("[5.0s] de economie groeit dit jaar"));
        assert!(report.contains("[40.0s] stakingen bij het spoor"));
        assert!(report.contains("Most Mentioned Words:"));
        assert!(report.contains("1. economie: 5.0s"));
        assert!(report.contains("Most Mentioned Phrases:"));
        assert!(report.contains("1. \"stakingen bij het spoor\": 40.0s"));
    }

    #[test]
    fn multiple_timestamps_are_comma_separated() {
        let keypoints = vec![Keypoint::new("economie", vec![5.0, 40.0, 5.0])];
        let report = render(&[], &keypoints);
        assert!(report.contains("economie: 5.0s, 40.0s, 5.0s"));
    }

    #[test]
    fn empty_sections_get_placeholders() {
        let report = render(&[], &[]);
        assert!(report.contains("  - No significant words encountered"));
        assert!(report.contains("  - No significant phrases encountered"));
    }
}
