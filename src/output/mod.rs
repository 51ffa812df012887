mod progress;
mod reporter;
mod text;

pub use progress::ProcessProgress;
pub use reporter::{Reporter, RunStats};
pub use text::{ColorMode, TextFormatter};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
