//! Bounded pool of workers that process files concurrently.

mod job;

pub use job::FileJob;

use std::io::Write;
use std::time::Instant;

use crossbeam_channel::bounded;
use rayon::ThreadPoolBuilder;

use crate::error::{Result, WslintError};
use crate::linter::{LintResult, Linter};
use crate::output::{Reporter, RunStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub workers: usize,
    pub fix: bool,
}

/// Runs one [`FileJob`] per linter on `min(workers, files)` threads.
///
/// Jobs are queued in the order given; results reach the reporter in
/// completion order.
#[derive(Debug)]
pub struct Pool {
    config: PoolConfig,
}

impl Pool {
    #[must_use]
    pub const fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Number of threads used for `files` jobs.
    #[must_use]
    pub fn worker_count(&self, files: usize) -> usize {
        self.config.workers.max(1).min(files)
    }

    /// Processes every file and feeds each result to `reporter`.
    ///
    /// A failing file never stops the others. Returns the tallies with the
    /// elapsed time set.
    ///
    /// # Errors
    /// Returns `Pool` if the worker threads cannot be started.
    pub fn run<W: Write>(
        &self,
        linters: Vec<Linter>,
        reporter: &mut Reporter<W>,
    ) -> Result<RunStats> {
        let files = linters.len();
        if files == 0 {
            return Ok(reporter.stats());
        }

        let workers = self.worker_count(files);
        let (job_tx, job_rx) = bounded::<FileJob>(files);
        let (result_tx, result_rx) = bounded::<LintResult>(files);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("wslint-worker-{i}"))
            .build()
            .map_err(|e| WslintError::Pool(e.to_string()))?;

        for id in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            pool.spawn(move || {
                let mut processed = 0usize;
                for job in &jobs {
                    if results.send(job.process()).is_err() {
                        break;
                    }
                    processed += 1;
                }
                tracing::debug!("<worker {id}> processed {processed} jobs");
            });
        }
        drop(job_rx);
        drop(result_tx);

        let start = Instant::now();
        for linter in linters {
            job_tx
                .send(FileJob::new(linter, self.config.fix))
                .map_err(|_| WslintError::Pool("job queue closed".to_string()))?;
        }
        drop(job_tx);

        // Disconnects once every worker has exited.
        for result in &result_rx {
            reporter.record(&result);
        }

        let elapsed = start.elapsed();
        reporter.set_elapsed(elapsed);
        tracing::debug!("<processed> {files} files in {elapsed:?}");

        Ok(reporter.stats())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
