// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case test execution with log capture.
//!
//! Each test case runs in its own child process with stdout redirected
//! to `<logs_dir>/<fileName>-<sanitizedCase>.log`. A failing test is
//! still a successful capture — the runner's exit status is reported
//! but never treated as an error.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Errors that can occur when running a test case
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("runner command is empty")]
    EmptyCommand,

    #[error("Failed to run test case: {0}")]
    Io(#[from] std::io::Error),
}

/// Make a test case name safe for use in a log file name.
///
/// Spaces become underscores; single and double quotes are dropped.
pub fn sanitize_test_name(name: &str) -> String {
    name.replace(' ', "_").replace(['\'', '"'], "")
}

/// Spawns one child process per test case, capturing stdout to a log.
#[derive(Clone, Debug)]
pub struct TestRunner {
    program: String,
    leading_args: Vec<String>,
    logs_dir: PathBuf,
}

impl TestRunner {
    /// Build a runner from a whitespace-separated command line such
    /// as `"npx jest"`. The test file path and `-t <case name>` are
    /// appended per run.
    pub fn from_command(command: &str, logs_dir: &Path) -> Result<Self, RunnerError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(RunnerError::EmptyCommand)?;
        Ok(Self {
            program,
            leading_args: parts.collect(),
            logs_dir: logs_dir.to_path_buf(),
        })
    }

    /// Log file path for one test case of one test file.
    pub fn log_path(&self, test_file: &Path, test_name: &str) -> PathBuf {
        let file_name = test_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.logs_dir
            .join(format!("{}-{}.log", file_name, sanitize_test_name(test_name)))
    }

    /// Human-readable command line for one case, for verbose output.
    pub fn command_line(&self, test_file: &Path, test_name: &str) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.leading_args.iter().cloned());
        parts.push(test_file.display().to_string());
        parts.push("-t".to_string());
        parts.push(test_name.to_string());
        parts.join(" ")
    }

    /// Run one test case, capturing its stdout to the case's log file.
    ///
    /// Stderr is inherited so runner noise stays visible on the
    /// console. Non-zero exit (a failing test) is returned as a
    /// status, not an error.
    pub async fn run_case(
        &self,
        test_file: &Path,
        test_name: &str,
    ) -> Result<ExitStatus, RunnerError> {
        let log_path = self.log_path(test_file, test_name);
        let log_file = std::fs::File::create(&log_path)?;

        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(test_file)
            .arg("-t")
            .arg(test_name)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log_file))
            .status()
            .await?;

        Ok(status)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
