//! List-reconciliation engine.
//!
//! Diffs successive generations of a sectioned, identity-and-version-tagged
//! collection and produces the ordered edit-set a stateful list consumer
//! applies to move from one generation to the next.
//!
//! ## Entry point
//!
//! ```
//! use listrecon_core::diff::ReconEngine;
//! use listrecon_core::ModelIdentity;
//!
//! let mut engine = ReconEngine::new();
//! engine.update(&[vec![ModelIdentity::new("a", 0u64), ModelIdentity::new("b", 0u64)]]);
//! let edits = engine.update(&[vec![ModelIdentity::new("b", 0u64), ModelIdentity::new("a", 0u64)]]);
//! assert_eq!(edits.moved_model_paths.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Infallible**: every generation, including empty ones and ones with
//!   duplicate ids, produces a well-defined edit-set.
//! - **Order-correct**: applying the edit-set with the documented contract to
//!   the old generation reproduces the new one exactly.
//! - **Id-scoped removals**: `removed_model_ids` lists an id only when no
//!   occurrence of it survives.

pub mod edit_set;
pub mod engine;
mod snapshot;

pub use edit_set::{Edit, EditCounts, EditSet, Move};
pub use engine::ReconEngine;
