use super::{Checker, CheckerKind, Violation, ViolationKind, to_rows};

/// Enforces exactly one blank line at the end of the line vector.
///
/// A file ending in a single newline reads as `[.., "last", ""]`, so "one
/// trailing empty element" is the well-formed state. Whitespace-only lines
/// count as empty here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalBlanks;

impl FinalBlanks {
    /// Indices of the trailing blank lines, in ascending order.
    fn check(lines: &[String]) -> Vec<usize> {
        let first_blank = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last_content| last_content + 1);

        (first_blank..lines.len()).collect()
    }
}

impl Checker for FinalBlanks {
    fn kind(&self) -> CheckerKind {
        CheckerKind::FinalBlanks
    }

    fn format(&self, mut lines: Vec<String>) -> (Vec<String>, Vec<Violation>) {
        let blanks = Self::check(&lines);

        match blanks.as_slice() {
            [] => {
                let rows = if lines.is_empty() {
                    Vec::new()
                } else {
                    vec![lines.len()]
                };
                let violation = Violation::new(
                    CheckerKind::FinalBlanks,
                    ViolationKind::TooFewBlanks,
                    rows,
                    "no blank lines at the end of the file",
                );
                lines.push(String::new());
                (lines, vec![violation])
            }
            [_] => (lines, Vec::new()),
            [first, ..] => {
                let keep = first + 1;
                let rows = to_rows(&blanks);
                let message =
                    format!("more than one blank line at the end of the file: rows {rows:?}");
                let violation = Violation::new(
                    CheckerKind::FinalBlanks,
                    ViolationKind::TooManyBlanks,
                    rows,
                    message,
                );
                lines.truncate(keep);
                (lines, vec![violation])
            }
        }
    }
}

#[cfg(test)]
#[path = "blanks_tests.rs"]
mod tests;
