use super::*;

fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(ToString::to_string).collect()
}

#[test]
fn single_final_newline_is_ok() {
    let input = lines(&["hello", ""]);
    let (out, violations) = FinalBlanks.format(input.clone());

    assert!(violations.is_empty());
    assert_eq!(out, input);
}

#[test]
fn empty_file_is_ok() {
    let (out, violations) = FinalBlanks.format(lines(&[""]));

    assert!(violations.is_empty());
    assert_eq!(out, lines(&[""]));
}

#[test]
fn missing_final_newline_is_too_few() {
    let (out, violations) = FinalBlanks.format(lines(&["hello"]));

    assert_eq!(out, lines(&["hello", ""]));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::TooFewBlanks);
    assert_eq!(violations[0].rows, vec![1]);
    assert_eq!(
        violations[0].message,
        "no blank lines at the end of the file"
    );
}

#[test]
fn several_blank_lines_are_too_many() {
    let (out, violations) = FinalBlanks.format(lines(&["hello", "", "", ""]));

    assert_eq!(out, lines(&["hello", ""]));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::TooManyBlanks);
    assert_eq!(violations[0].rows, vec![2, 3, 4]);
    assert_eq!(
        violations[0].message,
        "more than one blank line at the end of the file: rows [2, 3, 4]"
    );
}

#[test]
fn only_blank_lines_collapse_to_empty_file() {
    let (out, violations) = FinalBlanks.format(lines(&["", "", ""]));

    assert_eq!(out, lines(&[""]));
    assert_eq!(violations[0].kind, ViolationKind::TooManyBlanks);
    assert_eq!(violations[0].rows, vec![1, 2, 3]);
}

#[test]
fn whitespace_only_lines_count_as_blank() {
    let (out, violations) = FinalBlanks.format(lines(&["a", " ", "\t"]));

    assert_eq!(violations[0].kind, ViolationKind::TooManyBlanks);
    assert_eq!(out, lines(&["a", " "]));
}

#[test]
fn blank_lines_in_the_middle_are_ignored() {
    let input = lines(&["a", "", "", "b", ""]);
    let (out, violations) = FinalBlanks.format(input.clone());

    assert!(violations.is_empty());
    assert_eq!(out, input);
}

#[test]
fn empty_vector_gets_one_blank() {
    let (out, violations) = FinalBlanks.format(Vec::new());

    assert_eq!(out, lines(&[""]));
    assert_eq!(violations[0].kind, ViolationKind::TooFewBlanks);
    assert!(violations[0].rows.is_empty());
}

#[test]
fn format_is_idempotent() {
    for input in [
        lines(&["x"]),
        lines(&["x", "", ""]),
        lines(&["", ""]),
        lines(&["x", " ", " "]),
    ] {
        let (once, _) = FinalBlanks.format(input.clone());
        let (twice, violations) = FinalBlanks.format(once.clone());

        assert!(violations.is_empty(), "not idempotent for {input:?}");
        assert_eq!(once, twice);
    }
}
