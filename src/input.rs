//! Reading transcriber output and candidate files.
//!
//! Segments arrive as the transcriber writes them: a JSON array of
//! `{"start": .., "end": .., "text": ..}` objects, missing fields
//! defaulting to zero or empty. Candidates are a JSON array of
//! `[text, score]` pairs as the external keyword model emits them.

use crate::error::{KeypuntError, Result};
use crate::pipeline::candidates::RawCandidates;
use crate::pipeline::types::Segment;
use std::fs;
use std::path::Path;

pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| KeypuntError::SegmentParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub fn read_candidates(path: &Path) -> Result<RawCandidates> {
    let contents = fs::read_to_string(path)?;
    let pairs: Vec<(String, f64)> =
        serde_json::from_str(&contents).map_err(|e| KeypuntError::CandidateParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(RawCandidates::Scored(pairs))
}
