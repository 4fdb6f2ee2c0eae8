//! Validation orchestrator and exit-code policy
//!
//! Sequence, strictly in order:
//!
//! 1. Read every target's baseline. Any unreadable target aborts the run
//!    before the command is spawned.
//! 2. Run the generation command. A failing status aborts the run before
//!    any comparison.
//! 3. Re-read every target, classify it, and collect verdicts in the
//!    order the targets were supplied.
//!
//! | Outcome        | Exit code |
//! |----------------|-----------|
//! | `Success`      | 0         |
//! | `FilesChanged` | 1         |
//! | `RunFailure`   | 2         |

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::classify::{classify, FileVerdict};
use crate::errors::{CheckError, Result, EXIT_OPERATIONAL_FAILURE};
use crate::report::Reporter;
use crate::runner::{CommandRunner, CommandSpec};
use crate::snapshot::{read_actual, read_originals};
use crate::{log_op_end, log_op_error, log_op_start};

/// Run-level result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every target is unchanged
    Success,
    /// At least one target drifted or went missing
    FilesChanged,
    /// A target was unreadable up front or the command failed
    RunFailure,
}

impl ValidationOutcome {
    /// Derive the outcome of a finished (or aborted) run
    pub fn of(result: &Result<ValidationReport>) -> Self {
        match result {
            Ok(report) => report.outcome(),
            Err(_) => ValidationOutcome::RunFailure,
        }
    }
}

/// Map an outcome to the process exit code
pub fn exit_code(outcome: ValidationOutcome) -> u8 {
    match outcome {
        ValidationOutcome::Success => 0,
        ValidationOutcome::FilesChanged => 1,
        ValidationOutcome::RunFailure => EXIT_OPERATIONAL_FAILURE,
    }
}

/// Verdicts of a completed run, in supplied target order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    verdicts: Vec<(PathBuf, FileVerdict)>,
}

impl ValidationReport {
    pub fn verdicts(&self) -> &[(PathBuf, FileVerdict)] {
        &self.verdicts
    }

    /// Verdict for a path (first occurrence if supplied twice)
    pub fn verdict_for(&self, path: &Path) -> Option<&FileVerdict> {
        self.verdicts
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, verdict)| verdict)
    }

    pub fn drift_count(&self) -> usize {
        self.verdicts.iter().filter(|(_, v)| v.is_drift()).count()
    }

    pub fn outcome(&self) -> ValidationOutcome {
        if self.drift_count() > 0 {
            ValidationOutcome::FilesChanged
        } else {
            ValidationOutcome::Success
        }
    }
}

/// Check that running `command` reproduces `paths` unchanged
///
/// # Errors
///
/// - `PreconditionRead` if any target is unreadable before the run; the
///   command is never started.
/// - `CommandSpawn` / `CommandFailed` if the command could not start or
///   exited unsuccessfully; no comparison is made.
pub fn validate<R>(
    paths: &[PathBuf],
    command: &CommandSpec,
    runner: &R,
) -> Result<ValidationReport>
where
    R: CommandRunner + ?Sized,
{
    let start = Instant::now();
    log_op_start!("validate", target_count = paths.len());

    let result = validate_inner(paths, command, runner);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(report) => {
            log_op_end!(
                "validate",
                duration_ms = duration_ms,
                drift_count = report.drift_count()
            );
        }
        Err(err) => {
            log_op_error!("validate", err, duration_ms = duration_ms);
        }
    }
    result
}

fn validate_inner<R>(
    paths: &[PathBuf],
    command: &CommandSpec,
    runner: &R,
) -> Result<ValidationReport>
where
    R: CommandRunner + ?Sized,
{
    let mut targets = read_originals(paths)?;

    let status = runner.run(command)?;
    if !status.success() {
        return Err(CheckError::CommandFailed {
            status: status.to_string(),
        });
    }

    read_actual(&mut targets);

    let verdicts = targets
        .into_iter()
        .map(|target| {
            let verdict = classify(&target);
            tracing::debug!(
                path = %target.path().display(),
                verdict = verdict.label(),
                "classified target"
            );
            (target.path().to_path_buf(), verdict)
        })
        .collect();

    Ok(ValidationReport { verdicts })
}

/// Validate and render the result onto `reporter`
///
/// Verdicts go to the output sink in supplied order; an aborted run is
/// rendered on the error sink instead.
///
/// # Errors
///
/// `CheckError::Io` if either sink rejects a write. An aborted run is
/// not an error here; it is reported and mapped to `RunFailure`.
pub fn validate_and_report<R, O, E>(
    paths: &[PathBuf],
    command: &CommandSpec,
    runner: &R,
    reporter: &mut Reporter<O, E>,
) -> Result<ValidationOutcome>
where
    R: CommandRunner + ?Sized,
    O: Write,
    E: Write,
{
    let result = validate(paths, command, runner);
    match &result {
        Ok(report) => {
            for (path, verdict) in report.verdicts() {
                reporter.verdict(path, verdict)?;
            }
            reporter.flush()?;
        }
        Err(err) => reporter.failure(err)?,
    }
    Ok(ValidationOutcome::of(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_policy() {
        assert_eq!(exit_code(ValidationOutcome::Success), 0);
        assert_eq!(exit_code(ValidationOutcome::FilesChanged), 1);
        assert_eq!(exit_code(ValidationOutcome::RunFailure), 2);
    }

    #[test]
    fn test_error_result_is_run_failure() {
        let result: Result<ValidationReport> = Err(CheckError::EmptyCommand);
        assert_eq!(ValidationOutcome::of(&result), ValidationOutcome::RunFailure);
    }

    #[test]
    fn test_any_drift_is_files_changed() {
        let report = ValidationReport {
            verdicts: vec![
                (PathBuf::from("a.out"), FileVerdict::Unchanged),
                (PathBuf::from("b.out"), FileVerdict::BinaryDiff),
            ],
        };
        assert_eq!(report.drift_count(), 1);
        assert_eq!(report.outcome(), ValidationOutcome::FilesChanged);
        assert_eq!(
            report.verdict_for(Path::new("b.out")),
            Some(&FileVerdict::BinaryDiff)
        );
    }

    #[test]
    fn test_all_unchanged_is_success() {
        let report = ValidationReport {
            verdicts: vec![(PathBuf::from("a.out"), FileVerdict::Unchanged)],
        };
        assert_eq!(report.outcome(), ValidationOutcome::Success);
    }
}
