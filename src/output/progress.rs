use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the file-processing phase.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ProcessProgress {
    progress_bar: ProgressBar,
}

impl ProcessProgress {
    /// Creates a new progress bar over `total` files, drawn on stderr.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// A progress bar that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} Linting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓░"));
        pb.set_style(style);
        pb
    }

    /// Marks one more file as done.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Runs `f` with the bar cleared so that printed output is not mangled.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
