//! Doublestar-style glob expansion over the filesystem.
//!
//! `*`, `?` and character classes stay within one path component, `**`
//! spans any number of directories. Only regular files are returned.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, WslintError};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

#[must_use]
pub fn has_glob_meta(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// Compiles a pattern with doublestar semantics.
///
/// # Errors
/// Returns `InvalidPattern` if the pattern is malformed.
pub fn compile(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| WslintError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Splits a pattern into its leading literal directories and the depth the
/// remainder can reach (`None` when it contains `**`).
fn split_base(pattern: &str) -> (String, Option<usize>) {
    let components: Vec<&str> = pattern.split('/').collect();
    let literal = components
        .iter()
        .take_while(|c| !has_glob_meta(c))
        .count();

    let mut base = components[..literal].join("/");
    if base.is_empty() && pattern.starts_with('/') {
        base.push('/');
    }

    let rest = &components[literal..];
    let depth = if rest.iter().any(|c| c.contains("**")) {
        None
    } else {
        Some(rest.len())
    };

    (base, depth)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Expands `pattern` into the regular files it matches, in lexical order.
///
/// A pattern without glob metacharacters yields the path itself when it is
/// an existing file, and nothing otherwise.
///
/// # Errors
/// Returns `InvalidPattern` if the pattern is malformed.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile(pattern)?;

    if !has_glob_meta(pattern) {
        let path = Path::new(pattern);
        return Ok(if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let (base, depth) = split_base(pattern);
    let root = if base.is_empty() { "." } else { base.as_str() };

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = depth {
        walker = walker.max_depth(depth);
    }

    let files = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("<skipped> {e}");
                None
            }
        })
        .filter(is_file)
        .filter_map(|entry| {
            let path = entry.into_path();
            // Walking "." yields "./x"; the pattern was written as "x".
            let candidate = if base.is_empty() {
                path.strip_prefix(".").unwrap_or(&path).to_path_buf()
            } else {
                path
            };
            matcher.is_match(&candidate).then_some(candidate)
        })
        .collect();

    Ok(files)
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
