//! Validated run configuration.

use std::num::NonZeroUsize;

use crate::error::{Result, WslintError};

/// Everything a run needs, independent of how it was collected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    pub patterns: Vec<String>,
    pub exclude: Vec<String>,
    pub hidden: bool,
    pub fix: bool,
    pub workers: usize,
    pub verbose: bool,
    pub quiet: bool,
    pub experimental: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            exclude: Vec::new(),
            hidden: false,
            fix: false,
            workers: default_workers(),
            verbose: false,
            quiet: false,
            experimental: false,
        }
    }
}

impl Options {
    /// # Errors
    /// Returns `Config` if no pattern was given or the worker count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(WslintError::Config(
                "need to provide at least one path element".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(WslintError::Config(
                "number of parallel jobs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Splits a comma-separated exclude list.
///
/// Entries are trimmed and lose a leading `./`; empty entries are dropped.
#[must_use]
pub fn parse_excludes(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .map(|p| p.strip_prefix("./").unwrap_or(p))
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// One worker per available CPU.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
