//! Canonical schema constants for structured logging
//!
//! These constants keep field keys and event names consistent across
//! the logging macros and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Run and target context
pub const FIELD_PATH: &str = "path";
pub const FIELD_TARGET_COUNT: &str = "target_count";
pub const FIELD_PROGRAM: &str = "program";
pub const FIELD_VERDICT: &str = "verdict";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
