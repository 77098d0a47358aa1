// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sentinel scanning for the two tagged regions inside captured logs.
//!
//! Instrumented tests emit two markers on their console output:
//!
//! ```text
//! [CTEST][GET-PARAM] #### {"some":"json"} ####
//! [CTEST][SET-PARAM] redis.password, jwtSecret
//! ```
//!
//! The JSON region is read non-greedily across multiple lines; the
//! parameter line runs to the end of its line. Both markers are
//! literal sentinels chosen not to collide with ordinary log text.

use crate::redact::ParamSet;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for the sentinel-delimited JSON region.
///
/// Non-greedy so the first `####` terminator after the opening marker
/// ends the region; `(?s)` lets the payload span multiple lines.
static JSON_REGION: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: compile-time constant pattern, guaranteed valid
    #[allow(clippy::expect_used)]
    Regex::new(r"(?s)\[CTEST\]\[GET-PARAM\] #### (.*?) ####")
        .expect("JSON region regex pattern is invalid")
});

/// Regex for the parameter line: everything after the sentinel up to
/// end of line.
static PARAM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: compile-time constant pattern, guaranteed valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\[CTEST\]\[SET-PARAM\] (.*)").expect("param line regex pattern is invalid")
});

/// Find the first sentinel-delimited JSON region in the log text.
///
/// Returns the raw candidate text between the markers, untrimmed and
/// unvalidated. `None` means no region exists, which is not an error.
pub fn find_json_region(log_text: &str) -> Option<&str> {
    JSON_REGION
        .captures(log_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collect the redaction parameter list from the log text.
///
/// The first line carrying the `[CTEST][SET-PARAM]` sentinel is split
/// on commas; each entry is trimmed and empties are dropped. A
/// missing marker yields an empty set, which is not an error.
pub fn find_param_set(log_text: &str) -> ParamSet {
    let Some(line) = PARAM_LINE
        .captures(log_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return ParamSet::new();
    };

    line.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
