use anyhow::{Context, Result};
use clap::Parser;
use keypunt::cli::Cli;
use keypunt::config::Config;
use keypunt::input::{read_candidates, read_segments};
use keypunt::pipeline::Consolidator;
use keypunt::report;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?.with_env_overrides();
    if let Some(max_words) = cli.max_words {
        config.output.max_words = max_words;
    }
    if let Some(max_phrases) = cli.max_phrases {
        config.output.max_phrases = max_phrases;
    }

    let segments = read_segments(&cli.segments)
        .with_context(|| format!("reading segments from {}", cli.segments.display()))?;

    let candidates = match &cli.candidates {
        Some(path) => Some(
            read_candidates(path)
                .with_context(|| format!("reading candidates from {}", path.display()))?,
        ),
        None => None,
    };

    let consolidator = Consolidator::new(config);
    let result = consolidator.consolidate(&segments, candidates);

    if cli.verbose > 0 && !cli.quiet {
        eprintln!("{}", result.stats.to_string().dimmed());
    }
    if result.keypoints.is_empty() && !cli.quiet {
        eprintln!("{}", "no significant content found".yellow());
    }

    let rendered = report::render(&result.merged_segments, &result.keypoints);
    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => match Config::default_path() {
            Some(default) => Config::load_or_default(&default)
                .with_context(|| format!("loading config from {}", default.display())),
            None => Ok(Config::default()),
        },
    }
}
