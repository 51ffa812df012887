pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod linter;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod worker;

pub use error::{Result, WslintError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
