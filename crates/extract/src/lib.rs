// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log extraction and JSON redaction core for ctestmap.
//!
//! Given the raw text captured from one test-case run, this crate
//! recovers the (test file, test case) identifiers from the log file
//! name, locates a sentinel-delimited JSON document and a
//! sentinel-prefixed parameter line inside the text, and deletes
//! every key named by the parameter list from the document at any
//! nesting depth, including dotted paths such as `redis.password`.
//!
//! Nothing in this crate performs I/O or aborts on malformed input:
//! absent or unparsable regions are represented as data
//! ([`PayloadOutcome`]) so the caller can diagnose and continue.

pub mod ids;
pub mod pipeline;
pub mod redact;
pub mod scan;

pub use ids::TestId;
pub use pipeline::{extract, LogExtraction, PayloadOutcome};
pub use redact::{redact_keys, ParamSet};
