//! Classification engine.

use std::path::Path;

use similar::{Algorithm, TextDiff};

use crate::classify::model::{Decoded, FileVerdict};
use crate::snapshot::{Content, TargetFile};

/// Lines of unchanged context around each hunk
pub const DIFF_CONTEXT_LINES: usize = 3;

/// Classify one target from its attached snapshots
///
/// A target with no post-run snapshot attached is treated as missing:
/// nothing was observed after the run.
pub fn classify(target: &TargetFile) -> FileVerdict {
    match target.actual() {
        Some(actual) => classify_content(target.path(), target.original(), actual),
        None => FileVerdict::MissingAfterRun,
    }
}

/// Classify a baseline against a post-run read
pub fn classify_content(path: &Path, original: &[u8], actual: &Content) -> FileVerdict {
    let actual = match actual {
        Content::Bytes(bytes) => bytes,
        Content::Unreadable { .. } => return FileVerdict::MissingAfterRun,
    };

    match (Decoded::decode(original), Decoded::decode(actual)) {
        (Decoded::Text(original), Decoded::Text(actual)) => {
            match unified_diff(path, original, actual) {
                Some(diff) => FileVerdict::TextDiff(diff),
                None => FileVerdict::Unchanged,
            }
        }
        (original, actual) => {
            if original.as_bytes() == actual.as_bytes() {
                FileVerdict::Unchanged
            } else {
                FileVerdict::BinaryDiff
            }
        }
    }
}

/// Render a unified diff between two texts
///
/// Lines keep their terminators so the diff is exact. Returns `None`
/// when the diff has zero hunks, whatever the rendered length would be.
pub fn unified_diff(path: &Path, original: &str, actual: &str) -> Option<String> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(original, actual);

    let from_label = format!("{} : original", path.display());
    let to_label = format!("{} : generated", path.display());

    let mut unified = diff.unified_diff();
    unified
        .context_radius(DIFF_CONTEXT_LINES)
        .header(&from_label, &to_label);

    if unified.iter_hunks().next().is_none() {
        return None;
    }
    Some(unified.to_string())
}
