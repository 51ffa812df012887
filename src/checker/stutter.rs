use std::ops::Range;

use super::{Checker, CheckerKind, Violation, ViolationKind};

/// Experimental: flags repeated adjacent words such as `the the`.
///
/// Comparison is case-insensitive and ignores trailing non-letters on the
/// second word, so `hello hello!` stutters. The fix drops the first word of
/// each pair together with the whitespace that follows it.
#[derive(Debug, Clone, Default)]
pub struct Stutter {
    exceptions: Vec<String>,
}

impl Stutter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exceptions: Vec::new(),
        }
    }

    /// Words (case-insensitive) whose repetition is allowed.
    #[must_use]
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exceptions = exceptions
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Stuttering pairs in a line, as `"first second"` strings.
    #[must_use]
    pub fn find(&self, line: &str) -> Vec<String> {
        let words = tokenize(line);
        words
            .windows(2)
            .filter(|pair| self.is_stutter(&line[pair[0].clone()], &line[pair[1].clone()]))
            .map(|pair| format!("{} {}", &line[pair[0].clone()], &line[pair[1].clone()]))
            .collect()
    }

    /// Removes the first word of every stuttering pair until none remain.
    #[must_use]
    pub fn trim(&self, line: &str) -> String {
        let mut line = line.to_string();
        while let Some(span) = self.first_stutter(&line) {
            line.replace_range(span, "");
        }
        line
    }

    /// Span from the first word of the leading stutter up to the second word.
    fn first_stutter(&self, line: &str) -> Option<Range<usize>> {
        let words = tokenize(line);
        words
            .windows(2)
            .find(|pair| self.is_stutter(&line[pair[0].clone()], &line[pair[1].clone()]))
            .map(|pair| pair[0].start..pair[1].start)
    }

    fn is_stutter(&self, first: &str, second: &str) -> bool {
        let first = first.to_lowercase();
        !first.is_empty() && first == normalize(second) && !self.exceptions.contains(&first)
    }
}

/// Byte ranges of whitespace-separated words.
fn tokenize(line: &str) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(s..line.len());
    }

    words
}

/// Lower-cases a word after stripping trailing non-letters.
fn normalize(word: &str) -> String {
    word.trim_end_matches(|c: char| !c.is_alphabetic())
        .to_lowercase()
}

impl Checker for Stutter {
    fn kind(&self) -> CheckerKind {
        CheckerKind::Stutter
    }

    fn format(&self, mut lines: Vec<String>) -> (Vec<String>, Vec<Violation>) {
        let mut violations = Vec::new();

        for (i, line) in lines.iter_mut().enumerate() {
            let words = self.find(line);
            if words.is_empty() {
                continue;
            }
            violations.push(Violation::new(
                CheckerKind::Stutter,
                ViolationKind::Stutter,
                vec![i + 1],
                format!("stutters: words {words:?}"),
            ));
            *line = self.trim(line);
        }

        (lines, violations)
    }
}

#[cfg(test)]
#[path = "stutter_tests.rs"]
mod tests;
