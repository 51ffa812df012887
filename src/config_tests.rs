use super::*;

fn options(patterns: &[&str]) -> Options {
    Options {
        patterns: patterns.iter().map(ToString::to_string).collect(),
        ..Options::default()
    }
}

#[test]
fn valid_options_pass() {
    assert!(options(&["**/*.rs"]).validate().is_ok());
}

#[test]
fn patterns_are_required() {
    let err = options(&[]).validate().unwrap_err();
    assert!(matches!(err, WslintError::Config(_)));
    assert!(err.to_string().contains("at least one path element"));
}

#[test]
fn zero_workers_is_rejected() {
    let opts = Options {
        workers: 0,
        ..options(&["*"])
    };
    let err = opts.validate().unwrap_err();
    assert!(err.to_string().contains("greater than 0"));
}

#[test]
fn default_workers_is_positive() {
    assert!(default_workers() >= 1);
    assert_eq!(Options::default().workers, default_workers());
}

#[test]
fn defaults_check_without_fixing() {
    let opts = Options::default();
    assert!(!opts.fix);
    assert!(!opts.hidden);
    assert!(!opts.quiet);
    assert!(!opts.verbose);
    assert!(!opts.experimental);
}

#[test]
fn parse_excludes_trims_and_strips_dot_slash() {
    assert_eq!(
        parse_excludes(" ./vendor/** , **/*.md,./a.txt"),
        vec!["vendor/**", "**/*.md", "a.txt"]
    );
}

#[test]
fn parse_excludes_drops_empty_entries() {
    assert!(parse_excludes("").is_empty());
    assert_eq!(parse_excludes("a,, ,b"), vec!["a", "b"]);
}

#[test]
fn parse_excludes_keeps_parent_references() {
    assert_eq!(parse_excludes("../other/**"), vec!["../other/**"]);
}
