use clap::{ArgAction, Parser};

use crate::config::{Options, default_workers, parse_excludes};

#[derive(Parser, Debug)]
#[command(name = "wslint", version)]
#[command(about = "Check or fix trailing whitespace and final blank lines")]
#[command(long_about = "Check or fix trailing whitespace and enforce exactly one final \
    newline in every file matched by the given glob patterns.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Issues found, a file failed, nothing matched, or invalid arguments")]
#[command(disable_version_flag = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Format files in place
    #[arg(short = 'w', long = "write")]
    pub write: bool,

    /// Debug output
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Exclude patterns, comma separated
    #[arg(short = 'e', long = "exclude", value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Include hidden files and directories
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Number of parallel jobs [default: number of CPUs]
    #[arg(short = 'j', long = "jobs", value_name = "N", allow_negative_numbers = true)]
    pub jobs: Option<i64>,

    /// Suppress all messages except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable experimental checkers
    #[arg(short = 'x', long = "experimental")]
    pub experimental: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: (),

    /// Glob patterns of the files to check
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Converts parsed arguments into run options.
    ///
    /// A negative job count becomes zero so that validation rejects it.
    #[must_use]
    pub fn into_options(self) -> Options {
        let workers = self
            .jobs
            .map_or_else(default_workers, |j| usize::try_from(j).unwrap_or(0));

        Options {
            patterns: self.patterns,
            exclude: self.exclude.iter().flat_map(|e| parse_excludes(e)).collect(),
            hidden: self.all,
            fix: self.write,
            workers,
            verbose: self.debug,
            quiet: self.quiet,
            experimental: self.experimental,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
