//! Conversion between file content and a line vector.
//!
//! Splitting is on `\n` only. A final newline leaves an empty last element,
//! which is how "the file ends with a blank line" is represented; joining
//! with `\n` is the exact inverse.

/// Splits content into lines without terminators.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(String::from).collect()
}

/// Joins lines with a single line feed.
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
