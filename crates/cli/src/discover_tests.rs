// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use tempfile::TempDir;

#[test]
fn extracts_test_and_it_declarations_in_order() {
    let source = r#"
import { buildConfig } from '../src/config';

test('builds configuration', () => {});
it("applies overrides", () => {});
test("handles 'quoted' things", () => {});
"#;
    let names = extract_test_names(source);
    assert_eq!(
        names,
        vec![
            "builds configuration",
            "applies overrides",
            "handles 'quoted' things",
        ]
    );
}

#[test]
fn ignores_calls_that_are_not_declarations() {
    let source = "limit(10, x);\nunit('no match here')\n";
    assert!(extract_test_names(source).is_empty());
}

#[test]
fn name_capture_stops_at_closing_quote() {
    let names = extract_test_names("test('first', () => {}); test('second', () => {});");
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn discovers_test_and_spec_files_recursively() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("nested")).unwrap();
    std::fs::write(
        dir.path().join("config.test.ts"),
        "test('one', () => {});",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("nested/app.spec.ts"),
        "it('two', () => {});",
    )
    .unwrap();
    std::fs::write(dir.path().join("helper.ts"), "test('not scanned', x);").unwrap();

    let suites = discover_suites(dir.path()).unwrap();
    assert_eq!(suites.len(), 2);
    assert!(suites
        .iter()
        .any(|s| s.path.ends_with("config.test.ts") && s.test_names == vec!["one"]));
    assert!(suites
        .iter()
        .any(|s| s.path.ends_with("app.spec.ts") && s.test_names == vec!["two"]));
}

#[test]
fn empty_suite_dir_yields_no_suites() {
    let dir = TempDir::new().unwrap();
    assert!(discover_suites(dir.path()).unwrap().is_empty());
}

#[test]
fn file_without_declarations_keeps_empty_name_list() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("empty.test.ts"), "// nothing here\n").unwrap();

    let suites = discover_suites(dir.path()).unwrap();
    assert_eq!(suites.len(), 1);
    assert!(suites[0].test_names.is_empty());
}
