//! Change classification.
//!
//! Compares the pre-run and post-run snapshots of one target and assigns
//! it a [`FileVerdict`].
//!
//! ## Entry point
//!
//! ```
//! use regencheck_core::classify::{classify, FileVerdict};
//! use regencheck_core::snapshot::{Content, TargetFile};
//!
//! let target = TargetFile::new("a.out", b"x\n".to_vec())
//!     .with_actual(Content::Bytes(b"x\n".to_vec()));
//! assert_eq!(classify(&target), FileVerdict::Unchanged);
//! ```
//!
//! ## Guarantees
//!
//! - **Soundness**: byte-identical snapshots are always `Unchanged`.
//! - **Text first**: when both sides decode as UTF-8 the verdict carries an
//!   exact line diff; a diff with zero hunks is `Unchanged`.
//! - **Binary fallback**: when either side is not UTF-8 only a changed flag
//!   is produced.

pub mod engine;
pub mod model;

pub use engine::{classify, classify_content, unified_diff, DIFF_CONTEXT_LINES};
pub use model::{Decoded, FileVerdict};
