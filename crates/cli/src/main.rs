use std::env;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use intersect_cli::cli_args::{self, Args};
use intersect_cli::execution;
use intersect_core::error::{Error, Result};
use log::debug;

const PROGRAM_NAME: &str = env!("CARGO_BIN_NAME");

fn execute() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if cli_args::is_informational(&error) => {
            error.print()?;
            return Ok(());
        }
        Err(error) => {
            debug!("Argument parsing failed: {error}");
            if cli_args::requests_help(env::args_os().skip(1)) {
                Args::command().print_help()?;
                return Ok(());
            }
            return Err(Error::InvalidUsage);
        }
    };
    debug!("Arguments: {:?}", args);

    let report = execution::run(&args)?;
    print!("{report}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
