mod blanks;
mod stutter;
mod violation;
mod whitespace;

pub use blanks::FinalBlanks;
pub use stutter::Stutter;
pub use violation::{CheckerKind, Violation, ViolationKind};
pub use whitespace::TrailingWhitespace;

/// A line analyser.
///
/// Implementations are pure: no I/O and no state carried between calls.
/// `format` takes the whole `LineVector` and returns it, possibly rewritten,
/// together with any violations found. When no violation is reported the
/// returned lines must equal the input, and formatting its own output again
/// must report nothing.
pub trait Checker: Send + Sync {
    /// Identity used to group violations per checker.
    fn kind(&self) -> CheckerKind;

    fn format(&self, lines: Vec<String>) -> (Vec<String>, Vec<Violation>);
}

/// The mandatory checkers, in application order.
///
/// Trailing whitespace goes first so that whitespace-only lines at the end of
/// a file are already empty when the final-blanks check looks at them.
#[must_use]
pub fn default_checkers() -> Vec<Box<dyn Checker>> {
    vec![Box::new(TrailingWhitespace), Box::new(FinalBlanks)]
}

/// Formats 0-based indices as the 1-based rows shown to users.
pub(crate) fn to_rows(indices: &[usize]) -> Vec<usize> {
    indices.iter().map(|i| i + 1).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
