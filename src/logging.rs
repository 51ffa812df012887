//! Diagnostic output on stderr.

use std::io::IsTerminal;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

/// Most detailed level shown for the given flags. Quiet wins over verbose.
#[must_use]
pub const fn level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool, quiet: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(level(verbose, quiet))
        .try_init()
        .ok();
}
