use crate::defaults;
use crate::error::{KeypuntError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub merge: MergeConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Segment merging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    /// Minimum similarity for two segments to merge.
    pub similarity_threshold: f64,
    /// Similarity above which a cluster text is redundant against the base.
    pub text_merge_threshold: f64,
}

/// Candidate filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Below this many external candidates the frequency fallback runs.
    pub min_candidates: usize,
    /// Fewer surviving phrases than this triggers the fallback ladder.
    pub min_phrases: usize,
    /// Fewer surviving words than this triggers the fallback ladder.
    pub min_words: usize,
    /// Maximum share of 2-word phrases after balancing.
    pub two_word_cap: f64,
    /// Phrase count above which balancing kicks in.
    pub balance_threshold: usize,
    /// Minimum share of the shorter phrase a common run must cover.
    pub min_overlap_ratio: f64,
    /// Keep music-scored segments out of frequency extraction.
    pub filter_music: bool,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub max_words: usize,
    pub max_phrases: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::SIMILARITY_THRESHOLD,
            text_merge_threshold: defaults::TEXT_MERGE_SIMILARITY,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_candidates: defaults::MIN_CANDIDATES,
            min_phrases: defaults::MIN_PHRASES,
            min_words: defaults::MIN_WORDS,
            two_word_cap: defaults::TWO_WORD_CAP,
            balance_threshold: defaults::BALANCE_THRESHOLD,
            min_overlap_ratio: defaults::MIN_OVERLAP_RATIO,
            filter_music: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_words: defaults::MAX_WORDS,
            max_phrases: defaults::MAX_PHRASES,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(KeypuntError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - KEYPUNT_SIMILARITY_THRESHOLD → merge.similarity_threshold
    /// - KEYPUNT_MAX_WORDS → output.max_words
    /// - KEYPUNT_MAX_PHRASES → output.max_phrases
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(threshold) = std::env::var("KEYPUNT_SIMILARITY_THRESHOLD")
            && let Ok(value) = threshold.parse::<f64>()
        {
            self.merge.similarity_threshold = value;
        }

        if let Ok(max_words) = std::env::var("KEYPUNT_MAX_WORDS")
            && let Ok(value) = max_words.parse::<usize>()
        {
            self.output.max_words = value;
        }

        if let Ok(max_phrases) = std::env::var("KEYPUNT_MAX_PHRASES")
            && let Ok(value) = max_phrases.parse::<usize>()
        {
            self.output.max_phrases = value;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/keypunt/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keypunt").join("config.toml"))
    }
}
