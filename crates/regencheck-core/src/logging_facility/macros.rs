//! Operation boundary macros
//!
//! Each pipeline step (`read_originals`, `run_command`, `read_actual`,
//! and the enclosing `validate`) logs one `start` event and then exactly
//! one of `end` or `end_error`. Every event carries `component` (the
//! calling module), `op` and `event`; anything after the required
//! arguments is handed to `tracing` unchanged, so `%`/`?` sigils work.

/// Shared body of the boundary macros
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// A pipeline step is starting
///
/// ```
/// # use regencheck_core::log_op_start;
/// let targets = ["gen/a.rs", "gen/b.rs"];
/// log_op_start!("read_originals", target_count = targets.len());
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// A pipeline step finished; `duration_ms` is mandatory
///
/// ```
/// # use regencheck_core::log_op_end;
/// log_op_end!("run_command", duration_ms = 42u64, status = "exit status: 0");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// A pipeline step aborted the run
///
/// `$err` is anything that converts into
/// [`ExError`](crate::errors::ExError), usually `&CheckError`; its stable
/// code lands in `err.code` and its kind in `err.kind`.
///
/// ```
/// # use regencheck_core::{log_op_error, errors::CheckError};
/// let err = CheckError::CommandFailed { status: "exit status: 1".to_string() };
/// log_op_error!("run_command", &err, duration_ms = 10u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ($err).into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
