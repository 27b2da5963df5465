//! listrecon core - list reconciliation for sectioned collections
//!
//! This crate provides:
//! - The stateful diff engine turning successive generations into edit-sets
//! - The edit-set model (paths, moves, tagged edits, counts)
//! - An edit-set application mirror for verifying consumers
//! - Structured logging and error facilities

pub mod apply;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

pub use listrecon_core_types::schema;

// Re-export commonly used types
pub use apply::apply_edit_set;
pub use diff::{Edit, EditCounts, EditSet, Move, ReconEngine};
pub use errors::{ExError, ExErrorKind, ReconError, Result};
pub use listrecon_core_types::{ItemId, Path, Version, VersionHasher};
pub use model::{Generation, Identifiable, ModelIdentity};
