//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Generation shape
pub const FIELD_OLD_SECTIONS: &str = "old_sections";
pub const FIELD_NEW_SECTIONS: &str = "new_sections";
pub const FIELD_NEW_ITEMS: &str = "new_items";

// Edit-set counts
pub const FIELD_REMOVED_SECTIONS: &str = "removed_sections";
pub const FIELD_ADDED_SECTIONS: &str = "added_sections";
pub const FIELD_REMOVED_ITEMS: &str = "removed_items";
pub const FIELD_ADDED_ITEMS: &str = "added_items";
pub const FIELD_MOVED_ITEMS: &str = "moved_items";
pub const FIELD_UPDATED_ITEMS: &str = "updated_items";
pub const FIELD_REMOVED_IDS: &str = "removed_ids";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_PATH: &str = "err.path";
pub const FIELD_ERR_SECTION: &str = "err.section";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_UPDATE: &str = "reconcile_update";
pub const OP_APPLY: &str = "apply_edit_set";
pub const OP_DIFF: &str = "cli_diff";
pub const OP_REPLAY: &str = "cli_replay";
