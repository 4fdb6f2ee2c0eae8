//! Validate command
//!
//! Usage: regencheck --files <PATH>... [-v] [--log-format <FORMAT>] -- <COMMAND> [ARGS]...

use anyhow::Context;
use clap::{ArgAction, Args, ValueEnum};
use regencheck_core::logging_facility::{init_with_default_filter, Profile, LOG_ENV_VAR};
use regencheck_core::validate::validate_and_report;
use regencheck_core::{exit_code, CommandSpec, ProcessRunner, Reporter};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// The files to validate
    #[arg(long, required = true, num_args = 1.., value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Emit diagnostic logs on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Format of diagnostic logs
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// The command to run which will produce the files
    #[arg(last = true, required = true, value_name = "COMMAND_PART")]
    pub command: Vec<OsString>,
}

/// Execute validation and map the outcome to an exit code
///
/// # Errors
///
/// Fails if the command vector is empty or the report cannot be written.
pub fn execute(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    init_logging(&args);

    let command = CommandSpec::from_argv(args.command)?;
    tracing::debug!(command = %command, target_count = args.files.len(), "validating");

    let mut reporter = Reporter::stdio();
    let outcome = validate_and_report(&args.files, &command, &ProcessRunner, &mut reporter)
        .context("failed to write report")?;

    Ok(ExitCode::from(exit_code(outcome)))
}

/// Install a subscriber only when diagnostics were asked for
///
/// Without `-v` or `REGENCHECK_LOG` stderr carries nothing but the
/// operational failure messages.
fn init_logging(args: &ValidateArgs) {
    if args.verbose == 0 && std::env::var_os(LOG_ENV_VAR).is_none() {
        return;
    }

    let profile = match args.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    };
    let directive = if args.verbose >= 2 {
        "regencheck=debug"
    } else {
        "regencheck=info"
    };
    init_with_default_filter(profile, directive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ValidateArgs,
    }

    fn parse(argv: &[&str]) -> Result<ValidateArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("regencheck").chain(argv.iter().copied()))
            .map(|cli| cli.args)
    }

    #[test]
    fn test_files_and_command_vector() {
        let args = parse(&["--files", "a.out", "b.out", "--", "bash", "run.sh", "-x"]).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.out"), PathBuf::from("b.out")]);
        assert_eq!(
            args.command,
            vec![
                OsString::from("bash"),
                OsString::from("run.sh"),
                OsString::from("-x")
            ]
        );
        assert_eq!(args.verbose, 0);
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_files_flag_is_repeatable() {
        let args = parse(&["--files", "a.out", "--files", "b.out", "--", "make"]).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.out"), PathBuf::from("b.out")]);
    }

    #[test]
    fn test_files_required() {
        assert!(parse(&["--", "make"]).is_err());
    }

    #[test]
    fn test_command_required() {
        assert!(parse(&["--files", "a.out"]).is_err());
    }

    #[test]
    fn test_command_arguments_are_not_interpreted() {
        let args = parse(&["--files", "a.out", "--", "sh", "-c", "echo $HOME; rm -rf x"]).unwrap();
        assert_eq!(args.command[2], OsString::from("echo $HOME; rm -rf x"));
    }

    #[test]
    fn test_verbosity_and_format() {
        let args = parse(&["-vv", "--log-format", "json", "--files", "a", "--", "make"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
