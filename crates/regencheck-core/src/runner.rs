//! Command runner for the external generation command
//!
//! The command is an opaque capability: an argument vector goes in, an
//! exit status comes out. Arguments are passed to the OS verbatim; no
//! shell is involved, so there is no word splitting or expansion.
//!
//! The [`CommandRunner`] trait is the seam the orchestrator is written
//! against. [`ProcessRunner`] is the real implementation; tests inject
//! scripted runners.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;
use std::time::Instant;

use crate::errors::{CheckError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// A non-empty argument vector: executable followed by its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandSpec {
    /// Build a command from a full argument vector
    ///
    /// # Errors
    ///
    /// Returns `EmptyCommand` when `argv` has no elements.
    pub fn from_argv<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut parts = argv.into_iter().map(Into::into);
        let program = parts.next().ok_or(CheckError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How the child process terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Exited normally with this code
    Exited(i32),
    /// Terminated without an exit code (e.g. killed by a signal)
    Terminated,
}

impl CommandStatus {
    /// Only a zero exit code counts as success
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Exited(code) => write!(f, "exit status {}", code),
            CommandStatus::Terminated => write!(f, "termination without exit status"),
        }
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Terminated,
        }
    }
}

/// Executes a generation command and reports how it terminated
pub trait CommandRunner {
    /// Run `command` to completion
    ///
    /// # Errors
    ///
    /// Returns `CommandSpawn` if the process could not be started. A
    /// command that starts and exits non-zero is NOT an error here; the
    /// caller decides what a failing status means.
    fn run(&self, command: &CommandSpec) -> Result<CommandStatus>;
}

/// Runs the command as a child process of the current one
///
/// The child inherits the working directory, environment and standard
/// streams, so its own diagnostics stay visible. The wait is blocking
/// and has no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandStatus> {
        let start = Instant::now();
        let program = command.program().to_string_lossy().into_owned();
        log_op_start!("run_command", program = %program, command = %command);

        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|e| CheckError::CommandSpawn {
                program: program.clone(),
                reason: e.to_string(),
            });

        match status {
            Ok(status) => {
                let status = CommandStatus::from(status);
                log_op_end!(
                    "run_command",
                    duration_ms = start.elapsed().as_millis() as u64,
                    status = %status
                );
                Ok(status)
            }
            Err(err) => {
                log_op_error!(
                    "run_command",
                    &err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}
