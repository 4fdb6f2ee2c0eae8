//! regencheck core - drift detection for checked-in generated files
//!
//! This crate verifies that files produced by a generation command are in
//! sync with the copies committed to a repository. It provides:
//! - Snapshot reading of target files, tolerant of per-file failures
//! - A command runner seam for the external generation command
//! - Per-file change classification (text diff, binary change, missing)
//! - A reporter that renders verdicts as banners and unified diffs
//! - The validation orchestrator and its exit-code policy

pub mod classify;
pub mod errors;
pub mod logging_facility;
pub mod report;
pub mod runner;
pub mod schema;
pub mod snapshot;
pub mod validate;

// Re-export commonly used types
pub use classify::{classify, Decoded, FileVerdict};
pub use errors::{CheckError, ExError, ExErrorKind, Result};
pub use report::Reporter;
pub use runner::{CommandRunner, CommandSpec, CommandStatus, ProcessRunner};
pub use snapshot::{Content, TargetFile};
pub use validate::{
    exit_code, validate, validate_and_report, ValidationOutcome, ValidationReport,
};
