use super::{Checker, CheckerKind, Violation, ViolationKind, to_rows};

/// Flags lines ending in whitespace and strips it.
///
/// Whitespace is the Unicode `White_Space` property, so tabs, no-break
/// spaces and carriage returns all count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespace;

impl TrailingWhitespace {
    /// True if the line is non-empty and its last character is whitespace.
    #[must_use]
    pub fn has_trailing(line: &str) -> bool {
        line.chars().next_back().is_some_and(char::is_whitespace)
    }

    fn check(lines: &[String]) -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| Self::has_trailing(line))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Checker for TrailingWhitespace {
    fn kind(&self) -> CheckerKind {
        CheckerKind::TrailingWhitespace
    }

    fn format(&self, mut lines: Vec<String>) -> (Vec<String>, Vec<Violation>) {
        let indices = Self::check(&lines);
        if indices.is_empty() {
            return (lines, Vec::new());
        }

        for &i in &indices {
            let trimmed = lines[i].trim_end().len();
            lines[i].truncate(trimmed);
        }

        let rows = to_rows(&indices);
        let message = format!("has trailing whitespace: on rows {rows:?}");
        let violation = Violation::new(
            CheckerKind::TrailingWhitespace,
            ViolationKind::TrailingWhitespace,
            rows,
            message,
        );

        (lines, vec![violation])
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
