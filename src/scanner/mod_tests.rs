use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::error::WslintError;
use crate::path_utils::normalize;

fn fixture() -> TempDir {
    let dir = tempfile::Builder::new().prefix("wslint-match").tempdir().unwrap();
    let root = dir.path().join("dir");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "alpha\n").unwrap();
    fs::write(root.join(".hidden.txt"), "hidden\n").unwrap();
    fs::write(root.join("bin"), [0u8, 159, 146, 150]).unwrap();
    fs::write(root.join("x.exe"), "MZ text\n").unwrap();
    fs::write(root.join("sub/b.txt"), "beta\n").unwrap();
    dir
}

fn pattern(dir: &Path, tail: &str) -> String {
    format!("{}/{tail}", normalize(dir))
}

#[test]
fn filters_hidden_binary_and_excluded_files() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/*")).unwrap();

    assert_eq!(
        matcher.list_files(),
        vec![normalize(&dir.path().join("dir/a.txt"))]
    );
}

#[test]
fn hidden_flag_includes_dotfiles() {
    let dir = fixture();
    let mut matcher = Matcher::new(true, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/*")).unwrap();

    assert_eq!(
        matcher.list_files(),
        vec![
            normalize(&dir.path().join("dir/.hidden.txt")),
            normalize(&dir.path().join("dir/a.txt")),
        ]
    );
}

#[test]
fn double_star_descends() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/**/*.txt")).unwrap();

    assert_eq!(
        matcher.list_files(),
        vec![
            normalize(&dir.path().join("dir/a.txt")),
            normalize(&dir.path().join("dir/sub/b.txt")),
        ]
    );
}

#[test]
fn excluded_directory_named_in_pattern_stays_excluded() {
    let dir = fixture();
    let root = dir.path().join("proj");
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::create_dir_all(root.join(".github")).unwrap();
    fs::write(root.join("node_modules/a.js"), "a \n").unwrap();
    fs::write(root.join(".github/ci.yml"), "on: push \n").unwrap();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "proj/node_modules/*.js")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "proj/.github/*.yml")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "proj/**/*")).unwrap();

    assert!(matcher.list_files().is_empty());
}

#[test]
fn hidden_flag_does_not_lift_directory_excludes() {
    let dir = fixture();
    let git = dir.path().join("dir/.git");
    fs::create_dir_all(&git).unwrap();
    fs::write(git.join("config"), "[core]\n").unwrap();
    let mut matcher = Matcher::new(true, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/.git/*")).unwrap();

    assert!(matcher.list_files().is_empty());
}

#[test]
fn explicit_file_bypasses_filters() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/bin")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/.hidden.txt")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/x.exe")).unwrap();

    assert_eq!(matcher.list_files().len(), 3);
}

#[test]
fn overlapping_patterns_are_deduplicated() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/*")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/*.txt")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/a.txt")).unwrap();

    assert_eq!(matcher.list_files().len(), 1);
}

#[test]
fn insertion_order_follows_patterns() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/sub/*")).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/*")).unwrap();

    assert_eq!(
        matcher.list_files(),
        vec![
            normalize(&dir.path().join("dir/sub/b.txt")),
            normalize(&dir.path().join("dir/a.txt")),
        ]
    );
}

#[test]
fn user_excludes_are_applied() {
    let dir = fixture();
    let exclude = vec![pattern(dir.path(), "dir/sub/**"), String::new()];
    let mut matcher = Matcher::new(false, &exclude).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/**/*.txt")).unwrap();

    assert_eq!(
        matcher.list_files(),
        vec![normalize(&dir.path().join("dir/a.txt"))]
    );
}

#[test]
fn empty_user_excludes_are_ignored() {
    let with_empty = Matcher::new(false, &[String::new()]).unwrap();
    let without = Matcher::new(false, &[]).unwrap();

    assert_eq!(with_empty.excludes(), without.excludes());
}

#[test]
fn malformed_pattern_adds_nothing() {
    let mut matcher = Matcher::new(false, &[]).unwrap();

    let result = matcher.match_pattern("[");

    assert!(matches!(result, Err(WslintError::InvalidPattern { .. })));
    assert!(matcher.list_files().is_empty());
}

#[test]
fn malformed_exclude_is_rejected() {
    let result = Matcher::new(false, &["[".to_string()]);
    assert!(matches!(result, Err(WslintError::InvalidPattern { .. })));
}

#[test]
fn unmatched_pattern_is_not_an_error() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();

    matcher.match_pattern(&pattern(dir.path(), "dir/*.md")).unwrap();

    assert!(matcher.list_files().is_empty());
}

#[test]
fn list_files_is_a_snapshot() {
    let dir = fixture();
    let mut matcher = Matcher::new(false, &[]).unwrap();
    matcher.match_pattern(&pattern(dir.path(), "dir/a.txt")).unwrap();

    let mut snapshot = matcher.list_files();
    snapshot.clear();

    assert_eq!(matcher.list_files().len(), 1);
}
