use std::fmt;

/// Identity of a checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckerKind {
    TrailingWhitespace,
    FinalBlanks,
    Stutter,
}

impl CheckerKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrailingWhitespace => "whitespace",
            Self::FinalBlanks => "blanks",
            Self::Stutter => "stutter",
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    TrailingWhitespace,
    TooFewBlanks,
    TooManyBlanks,
    Stutter,
}

/// A single rule failure.
///
/// `rows` are 1-based and lie within the line vector the checker was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub checker: CheckerKind,
    pub kind: ViolationKind,
    pub rows: Vec<usize>,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(
        checker: CheckerKind,
        kind: ViolationKind,
        rows: Vec<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            kind,
            rows,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
