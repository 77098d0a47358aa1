// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ctestmap — per-case test driver and log-to-JSON mapper.
//!
//! Discovers test declarations in a suite directory, runs each test
//! case individually with its console output captured to a log file,
//! then extracts a sentinel-tagged JSON payload from every log,
//! redacts the keys the test asked to hide, and writes a nested
//! `{ testFile: { testCase: payloadOrNull } }` report.
//!
//! The extraction and redaction core lives in the
//! [`ctestmap_extract`] crate; this crate is the orchestration glue.

pub mod cli;
pub mod discover;
pub mod output;
pub mod report;
pub mod run;
pub mod runner;
