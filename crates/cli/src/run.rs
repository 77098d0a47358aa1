// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end run orchestration.
//!
//! Discovery and execution happen first (unless `--skip-run`), then
//! every log in the logs directory is ingested through the
//! extraction pipeline and folded into a [`ResultMapping`]. One bad
//! log entry never stops the batch; only an unreadable logs
//! directory or an unwritable report is fatal.

use crate::cli::Cli;
use crate::discover::{discover_suites, DiscoverError};
use crate::output::{print_error, print_warning};
use crate::report::ResultMapping;
use crate::runner::{RunnerError, TestRunner};
use ctestmap_extract::{extract, PayloadOutcome};
use std::path::Path;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("Failed to read logs directory {path}: {source}")]
    LogsDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SUITE_DIR is required unless --skip-run is set")]
    MissingSuiteDir,
}

/// Execute a full run: discover, run per case, ingest, report.
pub async fn run(cli: &Cli) -> Result<(), MapError> {
    if !cli.skip_run {
        run_suites(cli).await?;
    }

    let mapping = ingest_logs(&cli.logs_dir, cli.verbose)?;

    // Echo the compact mapping to stdout, then write the pretty file
    println!("{}", mapping.to_json()?);
    mapping.write(&cli.output).map_err(|e| MapError::Report {
        path: cli.output.display().to_string(),
        source: e,
    })?;
    println!("Results written to {}", cli.output.display());

    Ok(())
}

/// Discover test files and run every declared case, one log per case.
async fn run_suites(cli: &Cli) -> Result<(), MapError> {
    let suite_dir = cli.suite_dir.as_deref().ok_or(MapError::MissingSuiteDir)?;

    std::fs::create_dir_all(&cli.logs_dir).map_err(|e| MapError::LogsDir {
        path: cli.logs_dir.display().to_string(),
        source: e,
    })?;

    let runner = TestRunner::from_command(&cli.runner, &cli.logs_dir)?;
    let suites = discover_suites(suite_dir)?;
    if suites.is_empty() {
        print_warning(format_args!(
            "No test files found in {}",
            suite_dir.display()
        ));
    }

    for suite in &suites {
        println!("Processing file: {}", suite.path.display());
        if suite.test_names.is_empty() {
            println!("No test names found in file: {}", suite.path.display());
            continue;
        }
        for name in &suite.test_names {
            println!("Running test: {} in file: {}", name, suite.path.display());
            if cli.verbose {
                println!("Executing command: {}", runner.command_line(&suite.path, name));
            }
            match runner.run_case(&suite.path, name).await {
                // Failing tests still produce a usable log
                Ok(status) if !status.success() => {
                    if cli.verbose {
                        println!("Runner exited with {}", status);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    print_error(format_args!("Failed to run test '{}': {}", name, e));
                }
            }
        }
    }

    Ok(())
}

/// Ingest every log file in `logs_dir` into a fresh mapping.
///
/// Unreadable individual logs are skipped with an error diagnostic;
/// an unreadable directory aborts the run. Entries are processed in
/// file-name order so the report is deterministic.
pub fn ingest_logs(logs_dir: &Path, verbose: bool) -> Result<ResultMapping, MapError> {
    let entries = std::fs::read_dir(logs_dir).map_err(|e| MapError::LogsDir {
        path: logs_dir.display().to_string(),
        source: e,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut mapping = ResultMapping::new();
    for file_name in names {
        let path = logs_dir.join(&file_name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                print_error(format_args!(
                    "Failed to read log file {}: {}",
                    path.display(),
                    e
                ));
                continue;
            }
        };

        let extraction = extract(&content, &file_name);
        println!("Test File: {}", extraction.id.test_file);
        println!("Test Case: {}", extraction.id.test_case);

        match &extraction.payload {
            PayloadOutcome::Extracted { original, redacted } => {
                if verbose {
                    println!("Original JSON Data:");
                    println!(
                        "{}",
                        serde_json::to_string_pretty(original).unwrap_or_default()
                    );
                    if !extraction.params.is_empty() {
                        println!("Modified JSON Data:");
                        println!(
                            "{}",
                            serde_json::to_string_pretty(redacted).unwrap_or_default()
                        );
                    }
                }
            }
            PayloadOutcome::Missing => println!("No JSON data found."),
            PayloadOutcome::Malformed(err) => {
                print_warning(format_args!("Invalid JSON data in {}: {}", file_name, err));
            }
        }
        if extraction.params.is_empty() {
            println!("No parameter list found.");
        } else if verbose {
            let params: Vec<&str> = extraction.params.iter().map(String::as_str).collect();
            println!("Parameters: {}", params.join(", "));
        }

        mapping.insert(
            &extraction.id.test_file,
            &extraction.id.test_case,
            extraction.payload.into_value(),
        );
    }

    Ok(mapping)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
