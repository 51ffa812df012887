pub mod lint;

pub use lint::{
    STUTTER_EXCEPTIONS, collect_files, load_stutter_exceptions, run_lint, run_lint_impl,
};
