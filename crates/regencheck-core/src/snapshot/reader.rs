//! Snapshot reader: pure reads of target file content.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::errors::{CheckError, Result};
use crate::snapshot::target::{Content, TargetFile};
use crate::{log_op_end, log_op_error, log_op_start};

/// Read one file's full byte content
pub fn read_content(path: &Path) -> Content {
    match std::fs::read(path) {
        Ok(bytes) => Content::Bytes(bytes),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "target unreadable");
            Content::Unreadable {
                reason: e.to_string(),
            }
        }
    }
}

/// Read every path, in order, without stopping at failures
pub fn read_snapshot(paths: &[PathBuf]) -> Vec<(PathBuf, Content)> {
    paths
        .iter()
        .map(|path| (path.clone(), read_content(path)))
        .collect()
}

/// Capture the pre-run baseline for every target
///
/// All paths are attempted. If any is unreadable the whole baseline is
/// rejected with [`CheckError::PreconditionRead`] listing every failing
/// path in supplied order.
///
/// # Errors
///
/// Returns `PreconditionRead` when at least one path cannot be read.
pub fn read_originals(paths: &[PathBuf]) -> Result<Vec<TargetFile>> {
    let start = Instant::now();
    log_op_start!("read_originals", target_count = paths.len());

    let mut targets = Vec::with_capacity(paths.len());
    let mut unreadable = Vec::new();

    for (path, content) in read_snapshot(paths) {
        match content {
            Content::Bytes(bytes) => targets.push(TargetFile::new(path, bytes)),
            Content::Unreadable { .. } => unreadable.push(path),
        }
    }

    if !unreadable.is_empty() {
        let err = CheckError::PreconditionRead { paths: unreadable };
        log_op_error!(
            "read_originals",
            &err,
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    log_op_end!(
        "read_originals",
        duration_ms = start.elapsed().as_millis() as u64,
        target_count = targets.len()
    );
    Ok(targets)
}

/// Attach the post-run snapshot to every target
///
/// Read failures become [`Content::Unreadable`] on the target.
pub fn read_actual(targets: &mut [TargetFile]) {
    let start = Instant::now();
    log_op_start!("read_actual", target_count = targets.len());

    for target in targets.iter_mut() {
        let content = read_content(target.path());
        target.attach_actual(content);
    }

    log_op_end!(
        "read_actual",
        duration_ms = start.elapsed().as_millis() as u64
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_content_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let content = read_content(&dir.path().join("nope.out"));
        assert!(content.is_unreadable());
    }

    #[test]
    fn test_read_originals_collects_every_failure() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.out");
        std::fs::write(&present, b"ok\n").unwrap();
        let first_missing = dir.path().join("first.out");
        let second_missing = dir.path().join("second.out");

        let err = read_originals(&[
            first_missing.clone(),
            present,
            second_missing.clone(),
        ])
        .unwrap_err();

        match err {
            CheckError::PreconditionRead { paths } => {
                assert_eq!(paths, vec![first_missing, second_missing]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_originals_preserves_order() {
        let dir = TempDir::new().unwrap();
        let b = dir.path().join("b.out");
        let a = dir.path().join("a.out");
        std::fs::write(&b, b"b").unwrap();
        std::fs::write(&a, b"a").unwrap();

        let targets = read_originals(&[b.clone(), a.clone()]).unwrap();
        let paths: Vec<_> = targets.iter().map(|t| t.path().to_path_buf()).collect();
        assert_eq!(paths, vec![b, a]);
        assert_eq!(targets[0].original(), b"b");
    }

    #[test]
    fn test_read_actual_marks_deleted_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.out");
        std::fs::write(&path, b"before\n").unwrap();
        let mut targets = read_originals(std::slice::from_ref(&path)).unwrap();

        std::fs::remove_file(&path).unwrap();
        read_actual(&mut targets);

        assert!(targets[0].actual().is_some_and(Content::is_unreadable));
    }
}
