//! Inspect and validate GUI theme constants from the command line.

use anyhow::Result;
use ztheme::{core, logging};

fn run(cli_args: core::cli::CliArgs) -> Result<()> {
    let _guard = logging::init_logging(cli_args.verbose, cli_args.log_file)?;
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = run(cli_args) {
        core::platform::handle_error(error);
    }
}
