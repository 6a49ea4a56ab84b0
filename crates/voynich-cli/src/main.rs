use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use voynich_corpus::{Corpus, LoadMode, ParserConfig};
use voynich_types::Dialect;

mod report;

use report::NgramWindow;

#[derive(Parser, Debug)]
#[command(name = "voynich")]
#[command(about = "Entropy and n-gram statistics for Voynich transcriptions")]
struct Cli {
    /// Transcription file (EVA, Voynich-101 or plain text).
    #[arg(env = "TRANSCRIPTION_PATH")]
    path: PathBuf,
    /// eva, v101 or natural.
    #[arg(long, env = "TRANSCRIPTION_DIALECT", default_value = "eva")]
    dialect: Dialect,
    /// Joins several end lines or labels of one folio.
    #[arg(long, default_value = "|")]
    separator: String,
    /// mmap or owned.
    #[arg(long, env = "TRANSCRIPTION_LOAD_MODE", default_value = "mmap")]
    load_mode: LoadMode,
    #[arg(long, default_value_t = 2)]
    min_gram: usize,
    #[arg(long, default_value_t = 3)]
    max_gram: usize,
    /// How many of the most frequent boundary-spanning n-grams to report.
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ParserConfig::new(cli.dialect).with_separator(cli.separator.clone());

    let start = Instant::now();
    let parsed = Corpus::load_with_mode(&cli.path, &config, cli.load_mode)
        .with_context(|| format!("loading transcription {}", cli.path.display()))?;
    info!("parsed in {} ms", start.elapsed().as_millis());
    if let Some(err) = &parsed.error {
        warn!("statistics cover a partial corpus: {err}");
    }

    let window = NgramWindow {
        min: cli.min_gram,
        max: cli.max_gram,
        top: cli.top,
    };
    let report = report::build(&parsed, cli.dialect, window);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.preview);
    println!("{} entropy {}", report.dialect, report.entropy);
    println!(
        "{} folios, {} lines ({} read), {} words, {} with gallows",
        report.folios, report.lines, report.lines_read, report.words, report.gallows_words
    );
    for group in &report.groups {
        println!(
            "  {:<16} {:>4} folios  entropy {}",
            group.group, group.folios, group.entropy
        );
    }
    for entry in &report.top_ngrams {
        println!("  {:<8} {}", entry.ngram, entry.count);
    }
    Ok(())
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` overrides
/// the `info` default; unparsable directives are skipped.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["voynich", "eva.txt"]).unwrap();
        assert_eq!(cli.dialect, Dialect::Eva);
        assert_eq!(cli.load_mode, LoadMode::Mmap);
        assert_eq!(cli.separator, "|");
        assert_eq!((cli.min_gram, cli.max_gram, cli.top), (2, 3, 10));
        assert!(!cli.json);
    }

    #[test]
    fn parses_dialect_and_load_mode() {
        let cli = Cli::try_parse_from([
            "voynich",
            "--dialect",
            "v101",
            "--load-mode",
            "Owned",
            "v101.txt",
        ])
        .unwrap();
        assert_eq!(cli.dialect, Dialect::V101);
        assert_eq!(cli.load_mode, LoadMode::Owned);
    }

    #[test]
    fn rejects_unknown_load_mode() {
        let err = Cli::try_parse_from(["voynich", "--load-mode", "stream", "eva.txt"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("stream"));
    }
}
