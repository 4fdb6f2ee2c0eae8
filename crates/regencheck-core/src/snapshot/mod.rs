//! Snapshot reading of target files.
//!
//! A snapshot is the raw byte content of every declared target at one
//! point in time. Reading never stops at the first failure: each path
//! gets either its bytes or an unreadable marker so that every problem
//! can be reported together.
//!
//! ## Lifecycle
//!
//! - [`read_originals`] builds one [`TargetFile`] per path before the
//!   generation command runs. Any unreadable path aborts the run.
//! - [`read_actual`] attaches the post-run content. A failure here is
//!   data, not an error: the file may have been deleted by the command.

pub mod reader;
pub mod target;

pub use reader::{read_actual, read_content, read_originals, read_snapshot};
pub use target::{Content, TargetFile};
