//! The transcript consolidation pipeline.
//!
//! Six stages in a fixed order: segment merging, artifact filtering,
//! candidate normalization, stopword filtering, phrase merging, and
//! deduplication with ranking. `orchestrator::Consolidator` runs them
//! end to end; the stage modules are public for callers that want to
//! run a single transformation.

pub mod artifact_filter;
pub mod candidates;
pub mod finalize;
pub mod orchestrator;
pub mod phrase_merger;
pub mod segment_merger;
pub mod similarity;
pub mod stopword_filter;
pub mod types;

pub use artifact_filter::ArtifactFilter;
pub use candidates::{normalize_candidates, FrequencyExtractor, RawCandidates};
pub use orchestrator::{Consolidation, ConsolidationStats, Consolidator, FallbackLevel};
pub use stopword_filter::FragmentRules;
pub use types::{Candidate, Keypoint, KeypointKind, Segment};
