//! noqa suppression through the full analyze pipeline.

use no_private_methods::{lint_path, LinterOptions};
use std::fs;
use tempfile::TempDir;

fn lint_content(content: &str) -> usize {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("test.py");
    fs::write(&file_path, content).unwrap();

    let result = lint_path(&file_path, &LinterOptions::default()).unwrap();
    result
        .violations
        .iter()
        .map(|(_, violations)| violations.len())
        .sum()
}

#[test]
fn test_bare_noqa_suppresses() {
    let content = r#"
class Animal:
    def _move(self):  # noqa
        pass
"#;
    assert_eq!(lint_content(content), 0);
}

#[test]
fn test_rule_specific_noqa_suppresses() {
    let content = r#"
class Animal:
    def _move(self):  # noqa: NPM100
        pass
"#;
    assert_eq!(lint_content(content), 0);
}

#[test]
fn test_noqa_for_other_rule_does_not_suppress() {
    let content = r#"
class Animal:
    def _move(self):  # noqa: XYZ200
        pass
"#;
    assert_eq!(lint_content(content), 1);
}

#[test]
fn test_noqa_on_other_line_does_not_suppress() {
    let content = r#"
class Animal:
    def move(self):  # noqa
        pass

    def _move(self):
        pass
"#;
    assert_eq!(lint_content(content), 1);
}

#[test]
fn test_noqa_only_covers_its_own_line() {
    let content = r#"
class Animal:
    def _move(self):  # noqa
        pass

    def _turn(self):
        pass
"#;
    assert_eq!(lint_content(content), 1);
}
