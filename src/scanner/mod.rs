//! File discovery: glob expansion, exclusion and binary filtering.

mod binary;
mod filter;
mod glob;

pub use binary::{is_binary, looks_binary};
pub use filter::{ExcludeFilter, anchor, default_excludes, is_explicitly_included};
pub use glob::{compile, expand, has_glob_meta};

use std::path::Path;

use indexmap::IndexSet;

use crate::error::Result;
use crate::path_utils::{absolute, to_slash};

/// Accumulates the files matched by a series of glob patterns.
///
/// Paths are absolute with forward slashes, kept in first-seen order and
/// never duplicated.
#[derive(Debug)]
pub struct Matcher {
    excludes: ExcludeFilter,
    files: IndexSet<String>,
}

impl Matcher {
    /// Builds a matcher with the default excludes followed by `exclude`.
    ///
    /// Hidden files and directories are excluded unless `hidden` is set.
    /// Relative user patterns are anchored at the current directory.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn new(hidden: bool, exclude: &[String]) -> Result<Self> {
        let cwd = absolute(Path::new("."));
        let mut patterns = default_excludes(hidden);
        patterns.extend(
            exclude
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| anchor(p, &cwd)),
        );

        Ok(Self {
            excludes: ExcludeFilter::new(patterns)?,
            files: IndexSet::new(),
        })
    }

    #[must_use]
    pub fn excludes(&self) -> &[String] {
        self.excludes.patterns()
    }

    /// Expands `pattern` and adds the surviving files.
    ///
    /// Files named literally by the pattern skip the exclude and binary
    /// filters. Files that cannot be inspected are treated as binary.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern is malformed; nothing is added.
    pub fn match_pattern(&mut self, pattern: &str) -> Result<()> {
        let files = expand(pattern)?;
        let explicit = is_explicitly_included(pattern);

        for file in files {
            let abs = absolute(&file);
            let path = to_slash(&abs);

            if self.files.contains(&path) {
                tracing::debug!("<skipped> {path:?} <already in matches>");
                continue;
            }

            if explicit {
                tracing::debug!("<exception> {path:?} <explicitly included>");
                self.files.insert(path);
                continue;
            }

            if let Some(exclude) = self.excludes.matching_pattern(&path) {
                tracing::debug!("<skipped> {path:?} <matches exclude pattern> {exclude:?}");
                continue;
            }

            match is_binary(&abs) {
                Ok(false) => {
                    self.files.insert(path);
                }
                Ok(true) => tracing::debug!("<skipped> {path:?} <detected as binary>"),
                Err(e) => tracing::debug!("<skipped> {path:?} <unreadable, treated as binary>: {e}"),
            }
        }

        Ok(())
    }

    /// Snapshot of the accumulated files in insertion order.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        self.files.iter().cloned().collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
