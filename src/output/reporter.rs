use std::io::Write;
use std::time::Duration;

use crate::linter::LintResult;
use crate::path_utils::display_path;

use super::{ProcessProgress, TextFormatter};

/// Tallies over all processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub with_issues: usize,
    pub with_errors: usize,
    pub fixed: usize,
    pub elapsed: Duration,
}

impl RunStats {
    /// True iff no file had violations or a fatal error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.with_issues == 0 && self.with_errors == 0
    }

    fn record(&mut self, result: &LintResult) {
        self.files += 1;
        if result.has_issues() {
            self.with_issues += 1;
        }
        if result.has_error() {
            self.with_errors += 1;
        }
        if result.is_fixed() {
            self.fixed += 1;
        }
    }
}

/// Consumes results as they arrive and writes each file's report.
///
/// In quiet mode only fatal errors are surfaced, through the error log.
pub struct Reporter<W: Write> {
    formatter: TextFormatter,
    out: W,
    quiet: bool,
    progress: ProcessProgress,
    stats: RunStats,
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(formatter: TextFormatter, out: W, quiet: bool) -> Self {
        Self {
            formatter,
            out,
            quiet,
            progress: ProcessProgress::hidden(),
            stats: RunStats::default(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProcessProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Summary step for one file. Returns whether the file was ok.
    pub fn record(&mut self, result: &LintResult) -> bool {
        self.progress.inc();
        self.stats.record(result);

        if self.quiet {
            if let Some(error) = result.error() {
                tracing::error!("{}: {}", display_path(result.path()), error.detail());
            }
            return result.is_ok();
        }

        let Self {
            formatter,
            out,
            progress,
            ..
        } = self;
        progress.suspend(|| result.summary(formatter, out))
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.stats.elapsed = elapsed;
    }

    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Clears the progress bar and writes the run summary line.
    pub fn finish(&mut self) -> RunStats {
        self.progress.finish();
        if !self.quiet && self.stats.files > 0 {
            writeln!(self.out, "{}", self.formatter.format_summary(&self.stats)).ok();
        }
        self.out.flush().ok();
        self.stats
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
