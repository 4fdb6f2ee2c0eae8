use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

/// Exit code for an operational failure (unreadable target, failed command).
pub const EXIT_OPERATIONAL_FAILURE: u8 = 2;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that is carried by structured
/// log events and can be matched on in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Preconditions
    PreconditionRead,
    InvalidInput,

    // Command execution
    CommandSpawn,
    CommandFailed,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::PreconditionRead => "ERR_PRECONDITION_READ",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::CommandSpawn => "ERR_COMMAND_SPAWN",
            ExErrorKind::CommandFailed => "ERR_COMMAND_FAILED",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Built from a [`CheckError`] at logging boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    paths: Vec<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            paths: Vec::new(),
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the target paths involved
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the target paths involved
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        for path in &self.paths {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors that abort a validation run
///
/// Per-file problems after the command ran are not errors; they are
/// folded into that file's verdict instead.
#[derive(Error, Debug)]
pub enum CheckError {
    /// One or more targets could not be read before the command ran
    #[error("{} target file(s) could not be read before running the command", .paths.len())]
    PreconditionRead { paths: Vec<PathBuf> },

    /// The command vector was empty
    #[error("No command given")]
    EmptyCommand,

    /// The generation command could not be started
    #[error("Could not start `{program}`: {reason}")]
    CommandSpawn { program: String, reason: String },

    /// The generation command ran but reported failure
    #[error("Command failed with {status}")]
    CommandFailed { status: String },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Process exit code this error maps to
    ///
    /// Every aborting error is an operational failure.
    pub fn exit_code(&self) -> u8 {
        EXIT_OPERATIONAL_FAILURE
    }
}

impl From<&CheckError> for ExError {
    fn from(err: &CheckError) -> Self {
        match err {
            CheckError::PreconditionRead { paths } => ExError::new(ExErrorKind::PreconditionRead)
                .with_op("read_originals")
                .with_paths(paths.clone())
                .with_message("Target unreadable before running command"),

            CheckError::EmptyCommand => ExError::new(ExErrorKind::InvalidInput)
                .with_op("run_command")
                .with_message("Empty command vector"),

            CheckError::CommandSpawn { program, reason } => {
                ExError::new(ExErrorKind::CommandSpawn)
                    .with_op("run_command")
                    .with_message(format!("{}: {}", program, reason))
            }

            CheckError::CommandFailed { status } => ExError::new(ExErrorKind::CommandFailed)
                .with_op("run_command")
                .with_message(status.clone()),

            CheckError::Io(e) => ExError::new(ExErrorKind::Io).with_message(e.to_string()),
        }
    }
}

impl From<CheckError> for ExError {
    fn from(err: CheckError) -> Self {
        ExError::from(&err)
    }
}
