use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::WslintError;
use crate::output::TextFormatter;

use super::ViolationMap;

/// Outcome of processing one file.
#[derive(Debug)]
pub struct LintResult {
    path: PathBuf,
    violations: ViolationMap,
    fixed: bool,
    error: Option<WslintError>,
}

impl LintResult {
    #[must_use]
    pub const fn new(
        path: PathBuf,
        violations: ViolationMap,
        fixed: bool,
        error: Option<WslintError>,
    ) -> Self {
        Self {
            path,
            violations,
            fixed,
            error,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn violations(&self) -> &ViolationMap {
        &self.violations
    }

    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    #[must_use]
    pub const fn error(&self) -> Option<&WslintError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.violations.values().any(|v| !v.is_empty())
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// True iff the file had no violations and no fatal error.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.has_issues() && !self.has_error()
    }

    /// Writes the human-readable report for this file and returns whether it
    /// was ok. Nothing is written for an ok file.
    pub fn summary(&self, formatter: &TextFormatter, out: &mut dyn Write) -> bool {
        let ok = self.is_ok();
        if !ok {
            out.write_all(formatter.format(self).as_bytes()).ok();
        }
        ok
    }
}
