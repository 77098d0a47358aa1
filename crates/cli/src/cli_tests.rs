// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;
use std::path::Path;

#[test]
fn parses_suite_dir_with_defaults() {
    let cli = Cli::try_parse_from(["ctestmap", "spec"]).unwrap();
    assert_eq!(cli.suite_dir.as_deref(), Some(Path::new("spec")));
    assert_eq!(cli.logs_dir, Path::new("logs"));
    assert_eq!(cli.output, Path::new("result_mapping.json"));
    assert_eq!(cli.runner, "npx jest");
    assert!(!cli.skip_run);
    assert!(!cli.verbose);
}

#[test]
fn suite_dir_is_required_without_skip_run() {
    assert!(Cli::try_parse_from(["ctestmap"]).is_err());
}

#[test]
fn skip_run_makes_suite_dir_optional() {
    let cli = Cli::try_parse_from(["ctestmap", "--skip-run"]).unwrap();
    assert!(cli.suite_dir.is_none());
    assert!(cli.skip_run);
}

#[test]
fn overrides_are_parsed() {
    let cli = Cli::try_parse_from([
        "ctestmap",
        "spec",
        "--logs-dir",
        "out/logs",
        "--output",
        "out/mapping.json",
        "--runner",
        "yarn jest --silent",
        "--verbose",
    ])
    .unwrap();
    assert_eq!(cli.logs_dir, Path::new("out/logs"));
    assert_eq!(cli.output, Path::new("out/mapping.json"));
    assert_eq!(cli.runner, "yarn jest --silent");
    assert!(cli.verbose);
}
