//! Per-file façade over an ordered list of checkers.

mod lines;
mod result;

pub use lines::{join_lines, split_lines};
pub use result::LintResult;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::checker::{Checker, CheckerKind, Violation, default_checkers};
use crate::error::WslintError;

/// Violations grouped by the checker that produced them, in checker order.
pub type ViolationMap = IndexMap<CheckerKind, Vec<Violation>>;

pub struct Linter {
    path: PathBuf,
    checkers: Vec<Box<dyn Checker>>,
    violations: ViolationMap,
}

impl Linter {
    /// Creates a linter with the default checkers.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_checkers(path, default_checkers())
    }

    #[must_use]
    pub fn with_checkers(path: impl Into<PathBuf>, checkers: Vec<Box<dyn Checker>>) -> Self {
        Self {
            path: path.into(),
            checkers,
            violations: ViolationMap::new(),
        }
    }

    /// Appends a checker; it runs after the ones already configured.
    pub fn insert_checker(&mut self, checker: Box<dyn Checker>) {
        self.checkers.push(checker);
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn checker_kinds(&self) -> Vec<CheckerKind> {
        self.checkers.iter().map(|c| c.kind()).collect()
    }

    /// Runs every checker in order, each seeing the previous one's output.
    ///
    /// Violations from an earlier call are discarded.
    pub fn format(&mut self, mut lines: Vec<String>) -> (Vec<String>, &ViolationMap) {
        self.violations.clear();

        for checker in &self.checkers {
            let (next, violations) = checker.format(lines);
            lines = next;
            if !violations.is_empty() {
                self.violations
                    .entry(checker.kind())
                    .or_default()
                    .extend(violations);
            }
        }

        (lines, &self.violations)
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.violations.values().any(|v| !v.is_empty())
    }

    /// Finishes the file with its current violations.
    #[must_use]
    pub fn into_result(self, fixed: bool) -> LintResult {
        LintResult::new(self.path, self.violations, fixed, None)
    }

    /// Finishes the file with a fatal error.
    #[must_use]
    pub fn into_failure(self, error: WslintError) -> LintResult {
        LintResult::new(self.path, self.violations, false, Some(error))
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("path", &self.path)
            .field("checkers", &self.checker_kinds())
            .field("violations", &self.violations)
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
