use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WslintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restore permissions: {path}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker pool error: {0}")]
    Pool(String),
}

impl WslintError {
    /// Message including the underlying cause, for one-line reports.
    #[must_use]
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WslintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
