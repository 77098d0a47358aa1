// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-entry extraction pipeline.
//!
//! Ties the pieces together for a single captured log: recover the
//! test identifiers from the filename hint, scan for the JSON region
//! and the parameter line, parse, redact. The pipeline is infallible
//! by design — malformed or missing input becomes a [`PayloadOutcome`]
//! variant rather than an error, so one bad log never stops a batch.

use crate::ids::TestId;
use crate::redact::{redact_keys, ParamSet};
use crate::scan::{find_json_region, find_param_set};
use serde_json::Value;

/// What became of the JSON payload of one log entry.
#[derive(Debug)]
pub enum PayloadOutcome {
    /// Region found and parsed. Both sides are kept so callers can
    /// show what a redaction removed; `redacted` equals `original`
    /// when the parameter set was empty.
    Extracted {
        /// Parsed document before any keys were removed.
        original: Value,
        /// Document after redaction.
        redacted: Value,
    },
    /// No sentinel-delimited region in the log text.
    Missing,
    /// Region found but its content failed to parse as JSON.
    Malformed(serde_json::Error),
}

impl PayloadOutcome {
    /// The redacted document, or `None` for missing/malformed.
    pub fn into_value(self) -> Option<Value> {
        match self {
            PayloadOutcome::Extracted { redacted, .. } => Some(redacted),
            PayloadOutcome::Missing | PayloadOutcome::Malformed(_) => None,
        }
    }
}

/// Result of extracting one log entry.
#[derive(Debug)]
pub struct LogExtraction {
    /// Identifiers recovered from the filename hint.
    pub id: TestId,
    /// Redacted payload, or why there is none.
    pub payload: PayloadOutcome,
    /// Parameter set found in the log (empty when the marker is
    /// absent). Kept for diagnostics.
    pub params: ParamSet,
}

/// Extract and redact the payload of one captured log.
///
/// `filename_hint` is the log file's name, shaped
/// `<file>-<case>.log`. Redaction applies only when both a parsed
/// document and a non-empty parameter set exist; otherwise the
/// document passes through unmodified.
pub fn extract(log_text: &str, filename_hint: &str) -> LogExtraction {
    let id = TestId::from_filename(filename_hint);
    let params = find_param_set(log_text);

    let payload = match find_json_region(log_text) {
        None => PayloadOutcome::Missing,
        Some(region) => match serde_json::from_str::<Value>(region) {
            Err(err) => PayloadOutcome::Malformed(err),
            Ok(original) => {
                let mut redacted = original.clone();
                if !params.is_empty() {
                    redact_keys(&mut redacted, &params);
                }
                PayloadOutcome::Extracted { original, redacted }
            }
        },
    };

    LogExtraction {
        id,
        payload,
        params,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
