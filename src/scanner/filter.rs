use std::path::Path;

use globset::{GlobSet, GlobSetBuilder};

use crate::error::{Result, WslintError};
use crate::path_utils::normalize;

use super::glob::compile;

/// Directories that are never linted.
const EXCLUDED_DIRS: [&str; 6] = [
    "**/.git/**",
    "**/.vscode-server/**",
    "**/node_modules/**",
    "**/vendor/**",
    "**/.task/**",
    "**/.cache/**",
];

const HIDDEN: [&str; 2] = ["**/.*", "**/.*/**/*"];

/// Built-in exclude patterns, in the order they are tried.
#[must_use]
pub fn default_excludes(hidden: bool) -> Vec<String> {
    let mut patterns = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        patterns.push(globset::escape(&normalize(&exe)));
    }
    patterns.push("**/*.exe".to_string());
    patterns.extend(EXCLUDED_DIRS.iter().map(ToString::to_string));
    if !hidden {
        patterns.extend(HIDDEN.iter().map(ToString::to_string));
    }

    patterns
}

/// Anchors a relative user pattern at `cwd` so that it can be matched
/// against absolute paths. Absolute and `**` patterns are returned as is.
#[must_use]
pub fn anchor(pattern: &str, cwd: &Path) -> String {
    if pattern.starts_with("**") || pattern.starts_with('/') || Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let base = globset::escape(&normalize(cwd));
    format!("{}/{pattern}", base.trim_end_matches('/'))
}

/// A pattern that names a file literally: no `*` anywhere in it.
///
/// Only `*` counts. Patterns built from `?`, `[..]` or `{..}` alone are
/// explicit too, so their matches skip the exclude and binary filters.
#[must_use]
pub fn is_explicitly_included(pattern: &str) -> bool {
    !pattern.contains('*')
}

/// Ordered exclude patterns, each matched against the whole absolute path.
#[derive(Debug)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ExcludeFilter {
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(compile(pattern)?.glob().clone());
        }

        let set = builder.build().map_err(|source| WslintError::InvalidPattern {
            pattern: patterns.join(","),
            source,
        })?;

        Ok(Self { patterns, set })
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// First pattern (in configured order) that excludes the absolute `path`.
    #[must_use]
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.set
            .matches(path)
            .into_iter()
            .min()
            .map(|i| self.patterns[i].as_str())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
