//! keypunt - talking-point extraction for Dutch radio transcripts
//!
//! Takes noisy, timestamped speech-recognition output plus optional
//! scored candidate phrases, and produces a deduplicated, ranked list of
//! keypoints (words and phrases) with the timestamps they occur at.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod input;
pub mod music;
pub mod pipeline;
pub mod report;
pub mod stopwords;

// Pipeline
pub use pipeline::orchestrator::{Consolidation, ConsolidationStats, Consolidator, FallbackLevel};
pub use pipeline::types::{Candidate, Keypoint, KeypointKind, Segment};
pub use pipeline::{normalize_candidates, ArtifactFilter, FragmentRules, FrequencyExtractor, RawCandidates};

// Error handling
pub use error::{KeypuntError, Result};

// Config
pub use config::Config;
pub use stopwords::Stopwords;

/// Build version string with optional git commit hash.
///
/// Returns `"0.3.1+abc1234"` when git hash is available, `"0.3.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }
}
