//! Command-line interface for keypunt
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Talking-point extraction for Dutch radio transcripts
#[derive(Parser, Debug)]
#[command(
    name = "keypunt",
    version,
    about = "Talking-point extraction for Dutch radio transcripts"
)]
pub struct Cli {
    /// Transcriber segments as a JSON array of {start, end, text}
    #[arg(value_name = "SEGMENTS")]
    pub segments: PathBuf,

    /// Scored candidates as a JSON array of [text, score] pairs.
    /// Without this the frequency extractor runs on the transcript.
    #[arg(long, value_name = "PATH")]
    pub candidates: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of words in the report
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Maximum number of phrases in the report
    #[arg(long, value_name = "N")]
    pub max_phrases: Option<usize>,

    /// Suppress output (quiet mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print run statistics to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_minimal_invocation() {
        let cli = Cli::parse_from(["keypunt", "segments.json"]);
        assert_eq!(cli.segments, PathBuf::from("segments.json"));
        assert!(cli.candidates.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_full_invocation() {
        let cli = Cli::parse_from([
            "keypunt",
            "segments.json",
            "--candidates",
            "scores.json",
            "--config",
            "keypunt.toml",
            "-o",
            "report.txt",
            "--max-words",
            "10",
            "--max-phrases",
            "15",
            "-vv",
        ]);
        assert_eq!(cli.candidates, Some(PathBuf::from("scores.json")));
        assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
        assert_eq!(cli.max_words, Some(10));
        assert_eq!(cli.max_phrases, Some(15));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
