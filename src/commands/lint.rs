use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::checker::Stutter;
use crate::config::Options;
use crate::error::Result;
use crate::linter::Linter;
use crate::output::{ColorMode, ProcessProgress, Reporter, TextFormatter};
use crate::scanner::Matcher;
use crate::worker::{Pool, PoolConfig};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Words allowed to repeat, one per line, relative to the working directory.
pub const STUTTER_EXCEPTIONS: &str = "settings/stutters";

/// Runs a full check and returns the process exit code.
#[must_use]
pub fn run_lint(options: &Options) -> i32 {
    match run_lint_impl(options, io::stdout().lock()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Error: {}", e.detail());
            EXIT_FAILURE
        }
    }
}

/// Matches files, processes them on the pool and reports to `out`.
///
/// # Errors
/// Returns an error for invalid options, a malformed pattern, or a pool
/// that cannot be started. Per-file failures are reported, not returned.
pub fn run_lint_impl<W: Write>(options: &Options, out: W) -> Result<i32> {
    options.validate()?;

    let files = collect_files(options)?;
    if files.is_empty() {
        tracing::info!("No files found");
        return Ok(EXIT_FAILURE);
    }
    tracing::debug!("Processing {} files", files.len());

    let stutter = options.experimental.then(|| {
        Stutter::new().with_exceptions(load_stutter_exceptions(Path::new(STUTTER_EXCEPTIONS)))
    });
    let linters = files
        .iter()
        .map(|file| build_linter(Path::new(file), stutter.as_ref()))
        .collect();

    let total = u64::try_from(files.len()).unwrap_or(u64::MAX);
    let mut reporter = Reporter::new(TextFormatter::new(ColorMode::Auto), out, options.quiet)
        .with_progress(ProcessProgress::new(total, options.quiet));

    let pool = Pool::new(PoolConfig {
        workers: options.workers,
        fix: options.fix,
    });
    pool.run(linters, &mut reporter)?;
    let stats = reporter.finish();

    if stats.is_ok() {
        tracing::info!("No issues found");
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILURE)
    }
}

/// Expands every pattern in order and returns the matched files.
///
/// # Errors
/// Stops at the first malformed pattern or exclude.
pub fn collect_files(options: &Options) -> Result<Vec<String>> {
    let mut matcher = Matcher::new(options.hidden, &options.exclude)?;
    tracing::debug!("<excludes> {:?}", matcher.excludes());
    for pattern in &options.patterns {
        matcher.match_pattern(pattern)?;
    }

    let files = matcher.list_files();
    for file in &files {
        tracing::debug!("<included> {file:?}");
    }
    Ok(files)
}

/// Reads the stutter exception list; a missing or unreadable file means none.
#[must_use]
pub fn load_stutter_exceptions(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(ToString::to_string).collect(),
        Err(e) => {
            tracing::debug!("<stutter exceptions> {}: {e}", path.display());
            Vec::new()
        }
    }
}

fn build_linter(path: &Path, stutter: Option<&Stutter>) -> Linter {
    let mut linter = Linter::new(path);
    if let Some(stutter) = stutter {
        linter.insert_checker(Box::new(stutter.clone()));
    }
    linter
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
