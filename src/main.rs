use clap::Parser;

use wslint::cli::Cli;
use wslint::commands::run_lint;
use wslint::{EXIT_FAILURE, EXIT_SUCCESS, logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not failures; every other parse error is.
            let exit_code = if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
            e.print().ok();
            std::process::exit(exit_code);
        }
    };

    let options = cli.into_options();
    logging::init(options.verbose, options.quiet);

    std::process::exit(run_lint(&options));
}
