#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the wslint binary, running inside `dir`.
#[macro_export]
macro_rules! wslint {
    ($dir:expr) => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wslint"));
        cmd.current_dir($dir);
        cmd
    }};
}

/// Temporary directory populated with files for one test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates an empty fixture. The directory name is not hidden, so the
    /// default excludes do not apply to it.
    pub fn new() -> Self {
        Self {
            dir: tempfile::Builder::new()
                .prefix("wslint-it")
                .tempdir()
                .expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path`, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
