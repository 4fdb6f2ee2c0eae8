//! Target file model.

use std::path::{Path, PathBuf};

/// Outcome of reading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Full byte content of the file
    Bytes(Vec<u8>),
    /// The file could not be read; `reason` is the I/O error text
    Unreadable { reason: String },
}

impl Content {
    /// Bytes if the read succeeded
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Content::Bytes(bytes) => Some(bytes),
            Content::Unreadable { .. } => None,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, Content::Unreadable { .. })
    }
}

/// A declared target: its path, the content captured before the command
/// ran and, once captured, the content after.
///
/// Identity is the path. The original content is always present because
/// an unreadable original aborts the run before a `TargetFile` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    original: Vec<u8>,
    actual: Option<Content>,
}

impl TargetFile {
    pub fn new(path: impl Into<PathBuf>, original: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            original,
            actual: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content captured before the command ran
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Content captured after the command ran, if already attached
    pub fn actual(&self) -> Option<&Content> {
        self.actual.as_ref()
    }

    /// Attach the post-run snapshot
    ///
    /// A target is snapshotted at most once after the run; a second
    /// attach replaces the first.
    pub fn attach_actual(&mut self, content: Content) {
        self.actual = Some(content);
    }

    /// Builder form of [`TargetFile::attach_actual`]
    pub fn with_actual(mut self, content: Content) -> Self {
        self.attach_actual(content);
        self
    }
}
