use std::fs;
use crate::error::WslintError;
use crate::fs::replace;
use crate::linter::{LintResult, Linter, join_lines, split_lines};
use crate::path_utils::display_path;

/// One file queued for a worker, together with the linter that owns it.
#[derive(Debug)]
pub struct FileJob {
    linter: Linter,
    fix: bool,
}

impl FileJob {
    #[must_use]
    pub const fn new(linter: Linter, fix: bool) -> Self {
        Self { linter, fix }
    }

    /// Reads, checks and (in fix mode) rewrites the file.
    ///
    /// The file is only written when formatting changed its lines. Read and
    /// write failures end up on the returned result.
    #[must_use]
    pub fn process(self) -> LintResult {
        let Self { mut linter, fix } = self;
        let path = linter.path().to_path_buf();
        tracing::debug!("<processing> {}", display_path(&path));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return linter.into_failure(WslintError::FileRead { path, source }),
        };

        let lines = split_lines(&content);
        let original = lines.clone();
        let (formatted, _) = linter.format(lines);
        if linter.has_issues() {
            tracing::debug!("<issues> {}", display_path(&path));
        }

        if !fix || formatted == original {
            return linter.into_result(false);
        }

        match replace(&path, join_lines(&formatted).as_bytes()) {
            Ok(()) => {
                tracing::debug!("<fixed> {}", display_path(&path));
                linter.into_result(true)
            }
            Err(e) => linter.into_failure(e),
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
