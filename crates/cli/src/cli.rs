// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Run a test suite one case at a time and map each case to the
/// redacted JSON payload found in its captured log.
#[derive(Parser, Clone, Debug)]
#[command(name = "ctestmap", version, about = "Per-case test runner and log-to-JSON mapper")]
pub struct Cli {
    /// Directory scanned recursively for *.test.ts / *.spec.ts files
    #[arg(value_name = "SUITE_DIR", required_unless_present = "skip_run")]
    pub suite_dir: Option<PathBuf>,

    /// Directory holding one log file per executed test case
    #[arg(long, default_value = "logs", env = "CTESTMAP_LOGS_DIR")]
    pub logs_dir: PathBuf,

    /// File the result mapping is written to (pretty-printed JSON)
    #[arg(long, default_value = "result_mapping.json", env = "CTESTMAP_OUTPUT")]
    pub output: PathBuf,

    /// Test runner invocation; the test file and `-t <case name>` are
    /// appended for each run
    #[arg(long, default_value = "npx jest", env = "CTESTMAP_RUNNER")]
    pub runner: String,

    /// Skip discovery and execution, extract from existing logs only
    #[arg(long)]
    pub skip_run: bool,

    /// Verbose output mode (echoes commands and extracted payloads)
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
