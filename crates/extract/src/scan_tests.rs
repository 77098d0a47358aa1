// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn finds_json_region_on_one_line() {
    let log = "noise\n[CTEST][GET-PARAM] #### {\"a\": 1} ####\nmore noise\n";
    assert_eq!(find_json_region(log), Some("{\"a\": 1}"));
}

#[test]
fn json_region_spans_multiple_lines() {
    let log = "[CTEST][GET-PARAM] #### {\n  \"a\": 1\n} ####";
    assert_eq!(find_json_region(log), Some("{\n  \"a\": 1\n}"));
}

#[test]
fn first_region_wins() {
    let log = "[CTEST][GET-PARAM] #### {\"first\": 1} ####\n\
               [CTEST][GET-PARAM] #### {\"second\": 2} ####";
    assert_eq!(find_json_region(log), Some("{\"first\": 1}"));
}

#[test]
fn region_terminates_at_first_end_marker() {
    // Non-greedy: trailing #### elsewhere in the log must not extend it
    let log = "[CTEST][GET-PARAM] #### {\"a\": 1} ####\nbanner ####\n";
    assert_eq!(find_json_region(log), Some("{\"a\": 1}"));
}

#[test]
fn missing_json_marker_is_none() {
    assert_eq!(find_json_region("PASS spec/config.test.ts\n"), None);
}

#[test]
fn param_line_is_split_and_trimmed() {
    let log = "[CTEST][SET-PARAM] redis.password,  jwtSecret , statsd.host\n";
    let params = find_param_set(log);
    assert_eq!(params.len(), 3);
    assert!(params.contains("redis.password"));
    assert!(params.contains("jwtSecret"));
    assert!(params.contains("statsd.host"));
}

#[test]
fn duplicate_params_collapse() {
    let params = find_param_set("[CTEST][SET-PARAM] token, token, token\n");
    assert_eq!(params.len(), 1);
}

#[test]
fn empty_param_entries_are_dropped() {
    let params = find_param_set("[CTEST][SET-PARAM] a, , b,,\n");
    assert_eq!(params.len(), 2);
    assert!(params.contains("a"));
    assert!(params.contains("b"));
}

#[test]
fn empty_param_line_yields_empty_set() {
    assert!(find_param_set("[CTEST][SET-PARAM] \n").is_empty());
}

#[test]
fn missing_param_marker_yields_empty_set() {
    assert!(find_param_set("console output without markers\n").is_empty());
}

#[test]
fn param_line_stops_at_end_of_line() {
    let log = "[CTEST][SET-PARAM] a, b\nnot, part, of, the, list\n";
    let params = find_param_set(log);
    assert_eq!(params.len(), 2);
}
