//! Classification types.

/// Target content tagged by whether it decoded as UTF-8 text.
///
/// The classifier branches on this tag instead of on decode errors, so
/// the binary path is an ordinary case rather than an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// Valid UTF-8
    Text(&'a str),
    /// Not valid UTF-8; compared byte-for-byte
    Raw(&'a [u8]),
}

impl<'a> Decoded<'a> {
    pub fn decode(bytes: &'a [u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Decoded::Text(text),
            Err(_) => Decoded::Raw(bytes),
        }
    }

    /// Underlying bytes, regardless of tag
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Decoded::Text(text) => text.as_bytes(),
            Decoded::Raw(bytes) => bytes,
        }
    }
}

/// Per-file classification after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileVerdict {
    /// Post-run content matches the baseline
    Unchanged,
    /// Text content changed; carries the rendered unified diff
    TextDiff(String),
    /// Non-UTF-8 content changed; no diff body
    BinaryDiff,
    /// The file could not be read after the command ran
    MissingAfterRun,
}

impl FileVerdict {
    /// Whether this verdict counts as drift
    pub fn is_drift(&self) -> bool {
        !matches!(self, FileVerdict::Unchanged)
    }

    /// Short stable name, used in log events
    pub fn label(&self) -> &'static str {
        match self {
            FileVerdict::Unchanged => "unchanged",
            FileVerdict::TextDiff(_) => "text_diff",
            FileVerdict::BinaryDiff => "binary_diff",
            FileVerdict::MissingAfterRun => "missing_after_run",
        }
    }
}
