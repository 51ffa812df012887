use std::fmt::Write;
use std::io::IsTerminal;

use crate::linter::LintResult;
use crate::path_utils::display_path;

use super::RunStats;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD_GREEN: &str = "\x1b[1;32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders per-file reports and the run summary as plain text.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Report block for one file: a header line, then one line per
    /// violation and one for a fatal error.
    #[must_use]
    pub fn format(&self, result: &LintResult) -> String {
        let mut output = String::new();

        let path = self.colorize(&display_path(result.path()), ansi::BOLD_GREEN);
        let fixed = if result.is_fixed() {
            self.colorize(" (fixed)", ansi::YELLOW)
        } else {
            String::new()
        };
        let _ = writeln!(output, "✗ {path}{fixed}");

        for (checker, violations) in result.violations() {
            let name = self.colorize(checker.name(), ansi::RED);
            for violation in violations {
                let _ = writeln!(output, "  - {name}: {violation}");
            }
        }

        if let Some(error) = result.error() {
            let label = self.colorize("error", ansi::RED);
            let _ = writeln!(output, "  - {label}: {}", error.detail());
        }

        output
    }

    /// One-line run summary.
    #[must_use]
    pub fn format_summary(&self, stats: &RunStats) -> String {
        let mut summary = format!("Summary: {} files checked", stats.files);

        if stats.with_issues > 0 {
            let issues = self.colorize(&stats.with_issues.to_string(), ansi::RED);
            let _ = write!(summary, ", {issues} with issues");
        }
        if stats.with_errors > 0 {
            let errors = self.colorize(&stats.with_errors.to_string(), ansi::RED);
            let _ = write!(summary, ", {errors} failed");
        }
        if stats.fixed > 0 {
            let fixed = self.colorize(&stats.fixed.to_string(), ansi::GREEN);
            let _ = write!(summary, ", {fixed} fixed");
        }

        summary
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
