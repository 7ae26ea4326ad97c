// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface for the counter settings generator.
//!
//! The CLI reads a metric names file and writes the matching RenderDoc
//! performance counter settings document.

use std::{io, path::PathBuf, process};

use clap::Parser;
use rdoc_counters::{ConversionSummary, Error, convert_file};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Top-level CLI options parsed from user input.
#[derive(Debug, Parser)]
#[command(
    name = "rdoc-counters",
    version,
    about = "Generate RenderDoc-like performance counter JSON from metric names"
)]
struct Cli {
    /// Input TXT with metric names, one per line.
    #[arg(value_name = "INPUT_TXT")]
    input: PathBuf,

    /// Output JSON path.
    #[arg(value_name = "OUTPUT_JSON")]
    output: PathBuf
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Executes the conversion described by the parsed arguments.
///
/// # Errors
///
/// Propagates errors from reading the metric names and writing the document.
fn run(cli: &Cli) -> Result<ConversionSummary, Error> {
    debug!("Converting {} into {}", cli.input.display(), cli.output.display());
    let summary = convert_file(&cli.input, &cli.output)?;
    info!(
        "Converted {} metric names from {} into {}",
        summary.records,
        summary.input.display(),
        summary.output.display()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use tempfile::tempdir;

    use super::{Cli, run};

    #[test]
    fn cli_accepts_two_positional_paths() {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "names.txt", "counters.json"])
            .expect("failed to parse CLI");

        assert_eq!(cli.input, Path::new("names.txt"));
        assert_eq!(cli.output, Path::new("counters.json"));
    }

    #[test]
    fn cli_requires_output_path() {
        let error = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "names.txt"])
            .expect_err("expected missing argument error");
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn run_writes_document_for_parsed_paths() {
        let temp = tempdir().expect("failed to create tempdir");
        let input = temp.path().join("names.txt");
        let output = temp.path().join("counters.json");
        fs::write(&input, "GPU Time\n\nSM Active\n").expect("failed to write input");

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8")
        ])
        .expect("failed to parse CLI");

        let summary = run(&cli).expect("conversion failed");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.input, input);
        assert_eq!(summary.output, output);
        assert!(
            fs::read_to_string(&output)
                .expect("failed to read output")
                .contains("3109208768\n")
        );
    }

    #[test]
    fn run_reports_missing_input_with_path() {
        let temp = tempdir().expect("failed to create tempdir");
        let input = temp.path().join("missing.txt");
        let output = temp.path().join("counters.json");

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8")
        ])
        .expect("failed to parse CLI");

        let error = run(&cli).expect_err("expected missing input error");
        let message = error.to_display_string();
        assert!(message.starts_with("input file not found"));
        assert!(message.contains("missing.txt"));
        assert!(!output.exists());
    }
}
