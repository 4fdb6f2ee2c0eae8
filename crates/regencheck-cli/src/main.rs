//! regencheck CLI
//!
//! Verifies that checked-in generated files match what their generation
//! command currently produces.
//!
//! Usage: regencheck --files <PATH>... -- <COMMAND> [ARGS]...

use clap::Parser;
use regencheck_core::errors::{CheckError, EXIT_OPERATIONAL_FAILURE};
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "regencheck", version)]
#[command(
    about = "Validate that generated files are up to date with their generator",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    validate: commands::validate::ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::validate::execute(cli.validate) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<CheckError>()
                .map_or(EXIT_OPERATIONAL_FAILURE, CheckError::exit_code);
            ExitCode::from(code)
        }
    }
}
