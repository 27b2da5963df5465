//! Operation logging macros
//!
//! Every operation emits one `start` event and exactly one of `end` or
//! `end_error`. All three carry `component`, `op` and `event`; field keys are
//! listed in [`crate::schema`].

/// Emit one operation event at the given level
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

/// Log the start of an operation
///
/// Extra fields use `tracing` field syntax.
///
/// ```
/// # use listrecon_core::log_op_start;
/// log_op_start!("reconcile_update");
/// log_op_start!("reconcile_update", old_sections = 2usize, new_sections = 3usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START)
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START, $($field)*)
    };
}

/// Log the successful end of an operation
///
/// The `counts = ...` form takes an [`EditCounts`](crate::EditCounts) and
/// spreads it into one field per edit category.
///
/// ```
/// # use listrecon_core::{log_op_end, EditCounts};
/// log_op_end!("apply_edit_set", duration_ms = 3);
/// log_op_end!("reconcile_update", duration_ms = 3, counts = EditCounts::default());
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr, counts = $counts:expr) => {{
        let counts: $crate::EditCounts = $counts;
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration,
            removed_sections = counts.removed_sections,
            added_sections = counts.added_sections,
            removed_items = counts.removed_items,
            added_items = counts.added_items,
            moved_items = counts.moved_items,
            updated_items = counts.updated_items,
            removed_ids = counts.removed_ids,
        );
    }};
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::ExError). Its kind
/// and code are always recorded; path and section only when the error has
/// them.
///
/// ```
/// # use listrecon_core::{log_op_error, errors::ReconError};
/// let err = ReconError::SectionCountMismatch { expected: 2, actual: 1 };
/// log_op_error!("apply_edit_set", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::ExError = $err.into();
        let err_path = ex_err.path().map(|path| path.to_string());
        $crate::__log_op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.path = err_path.as_deref(),
            err.section = ex_err.section(),
            err.message = ex_err.message(),
            $($($field)*)?
        );
    }};
}
