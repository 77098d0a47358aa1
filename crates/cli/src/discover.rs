// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test declaration discovery.
//!
//! Scans a suite directory for Jest-style spec files and pulls the
//! test case names out of `test('...', ...)` / `it("...", ...)`
//! declarations with a text pattern. Good enough for the stable,
//! narrowly-scoped files this tool targets; it does not parse
//! TypeScript.

use crate::output::print_warning;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Glob suffixes identifying test source files.
const TEST_FILE_PATTERNS: [&str; 2] = ["**/*.test.ts", "**/*.spec.ts"];

/// Regex for `test('name',` / `it("name",` declarations.
static TEST_DECL: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: compile-time constant pattern, guaranteed valid
    #[allow(clippy::expect_used)]
    Regex::new(r#"\b(?:test|it)\(['"](.*?)['"],"#).expect("test declaration regex is invalid")
});

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read suite directory: {0}")]
    Io(#[from] std::io::Error),
}

/// One discovered test source file and its test case names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSuite {
    /// Path to the test source file.
    pub path: PathBuf,
    /// Declared test case names, in file order.
    pub test_names: Vec<String>,
}

/// Find every test file under `suite_dir` and extract its test names.
///
/// Files that cannot be read are skipped with a warning; the rest of
/// the batch proceeds. The returned list is sorted by path so runs
/// are deterministic.
pub fn discover_suites(suite_dir: &Path) -> Result<Vec<TestSuite>, DiscoverError> {
    let mut paths = Vec::new();
    for pattern in TEST_FILE_PATTERNS {
        let full_pattern = suite_dir.join(pattern);
        for entry in glob::glob(&full_pattern.to_string_lossy())? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => print_warning(format_args!("Skipping unreadable path: {}", e)),
            }
        }
    }
    paths.sort();
    paths.dedup();

    let mut suites = Vec::new();
    for path in paths {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                print_warning(format_args!(
                    "Failed to read test file {}: {}",
                    path.display(),
                    e
                ));
                continue;
            }
        };
        suites.push(TestSuite {
            test_names: extract_test_names(&content),
            path,
        });
    }

    Ok(suites)
}

/// Extract declared test names from test source text, in order.
pub fn extract_test_names(content: &str) -> Vec<String> {
    TEST_DECL
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
