//! Human-readable rendering of verdicts and run failures
//!
//! Drift findings go to the output sink (stdout in the CLI), operational
//! failures to the error sink (stderr). Unchanged targets render nothing.

use std::io::{self, Write};
use std::path::Path;

use crate::classify::FileVerdict;
use crate::errors::CheckError;

/// Width of the separator lines around a banner
pub const BANNER_WIDTH: usize = 50;

/// Renders findings onto a pair of byte sinks
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter bound to the process standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Render one verdict
    ///
    /// # Errors
    ///
    /// Propagates write failures from the output sink.
    pub fn verdict(&mut self, path: &Path, verdict: &FileVerdict) -> io::Result<()> {
        match verdict {
            FileVerdict::Unchanged => {}
            FileVerdict::TextDiff(diff) => {
                self.banner(&path.display().to_string())?;
                self.out.write_all(diff.as_bytes())?;
            }
            FileVerdict::BinaryDiff => {
                writeln!(self.out, "Binary file {} has changes", path.display())?;
            }
            FileVerdict::MissingAfterRun => {
                self.banner(&format!(
                    "{} is missing after running command",
                    path.display()
                ))?;
            }
        }
        Ok(())
    }

    /// Render a run-aborting failure
    ///
    /// # Errors
    ///
    /// Propagates write failures from the error sink.
    pub fn failure(&mut self, error: &CheckError) -> io::Result<()> {
        match error {
            CheckError::PreconditionRead { paths } => {
                for path in paths {
                    writeln!(self.err, "{} could not be read.", path.display())?;
                }
            }
            CheckError::CommandFailed { .. } => {
                writeln!(self.err, "Command failed")?;
            }
            CheckError::CommandSpawn { .. } => {
                writeln!(self.err, "Command failed")?;
                writeln!(self.err, "{}", error)?;
            }
            CheckError::EmptyCommand | CheckError::Io(_) => {
                writeln!(self.err, "{}", error)?;
            }
        }
        self.err.flush()
    }

    /// Flush the output sink
    ///
    /// # Errors
    ///
    /// Propagates the flush failure.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Recover the sinks
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn banner(&mut self, text: &str) -> io::Result<()> {
        let rule = "-".repeat(BANNER_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{rule}")
    }
}
