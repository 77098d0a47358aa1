// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result mapping accumulator and report serialization.
//!
//! The final report is `{ testFile: { testCase: payloadOrNull } }`.
//! The mapping is an explicit value threaded through processing and
//! merged by the caller, not a process-wide accumulator; key order
//! follows insertion order (serde_json is built with
//! `preserve_order`).

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Two-level mapping from test file to test case to redacted payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultMapping {
    files: Map<String, Value>,
}

impl ResultMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entry. `None` becomes JSON `null`, so entries that
    /// failed extraction still appear in the report.
    pub fn insert(&mut self, test_file: &str, test_case: &str, payload: Option<Value>) {
        let cases = self
            .files
            .entry(test_file.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(cases) = cases {
            cases.insert(test_case.to_string(), payload.unwrap_or(Value::Null));
        }
    }

    /// Fold another mapping into this one, preserving its entry order.
    pub fn merge(&mut self, other: ResultMapping) {
        for (file, cases) in other.files {
            if let Value::Object(cases) = cases {
                for (case, payload) in cases {
                    self.insert(&file, &case, Some(payload));
                }
            }
        }
    }

    /// Number of test files recorded.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no entries have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Compact JSON, echoed to stdout at the end of a run.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Pretty-printed JSON for the report file.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty-printed report to `path`.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        let json = self
            .to_pretty_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
