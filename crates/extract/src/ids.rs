// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test identifier recovery from log file names.

/// Identifiers for one executed test case, recovered from a log file
/// name shaped like `<file>-<case>.log`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestId {
    /// Base name of the test source file.
    pub test_file: String,
    /// Sanitized test case name (may itself contain hyphens).
    pub test_case: String,
}

impl TestId {
    /// Split a log filename hint into test file and test case.
    ///
    /// The split happens at the first hyphen only, so case names that
    /// contain hyphens survive intact. One trailing `.log` extension
    /// is removed. A hint without any hyphen yields an empty case.
    pub fn from_filename(hint: &str) -> Self {
        match hint.split_once('-') {
            Some((file, rest)) => Self {
                test_file: file.to_string(),
                test_case: strip_log_extension(rest).to_string(),
            },
            None => Self {
                test_file: strip_log_extension(hint).to_string(),
                test_case: String::new(),
            },
        }
    }
}

fn strip_log_extension(name: &str) -> &str {
    name.strip_suffix(".log").unwrap_or(name)
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
