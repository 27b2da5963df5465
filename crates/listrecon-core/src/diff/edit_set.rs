//! Edit-set output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! `removed_model_ids` is a `BTreeSet` so serialized output is deterministic.

use listrecon_core_types::{ItemId, Path};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;

/// An item moved from an old-generation path to a new-generation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Path,
    pub to: Path,
}

impl Move {
    pub const fn new(from: Path, to: Path) -> Self {
        Self { from, to }
    }
}

/// The structural changes turning one generation into the next.
///
/// Apply the categories in field order. Removal paths and move `from` paths
/// address the old generation; insertion, move `to` and update paths address
/// the new one. Old items not removed, not moved and not inside a removed
/// section keep their relative order and fill the remaining new positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditSet {
    /// Sections dropped from the tail
    pub removed_sections: Range<usize>,
    /// Sections appended at the tail
    pub added_sections: Range<usize>,
    pub removed_model_paths: Vec<Path>,
    pub added_model_paths: Vec<Path>,
    pub moved_model_paths: Vec<Move>,
    pub updated_model_paths: Vec<Path>,
    /// Ids present in the old generation and absent from the new one
    pub removed_model_ids: BTreeSet<ItemId>,
    /// Some section shared by both generations went from empty to non-empty
    pub contains_first_add_in_section: bool,
    /// Some section shared by both generations went from non-empty to empty
    pub contains_last_remove_in_section: bool,
}

/// One edit, tagged by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    RemoveSections { range: Range<usize> },
    AddSections { range: Range<usize> },
    RemoveItem { path: Path },
    AddItem { path: Path },
    MoveItem { from: Path, to: Path },
    UpdateItem { path: Path },
}

/// Per-category sizes of an edit-set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    pub removed_sections: usize,
    pub added_sections: usize,
    pub removed_items: usize,
    pub added_items: usize,
    pub moved_items: usize,
    pub updated_items: usize,
    pub removed_ids: usize,
}

impl EditSet {
    /// True when applying this edit-set would change nothing
    pub fn is_empty(&self) -> bool {
        self.removed_sections.is_empty()
            && self.added_sections.is_empty()
            && self.removed_model_paths.is_empty()
            && self.added_model_paths.is_empty()
            && self.moved_model_paths.is_empty()
            && self.updated_model_paths.is_empty()
            && self.removed_model_ids.is_empty()
    }

    pub fn summary(&self) -> EditCounts {
        EditCounts {
            removed_sections: self.removed_sections.len(),
            added_sections: self.added_sections.len(),
            removed_items: self.removed_model_paths.len(),
            added_items: self.added_model_paths.len(),
            moved_items: self.moved_model_paths.len(),
            updated_items: self.updated_model_paths.len(),
            removed_ids: self.removed_model_ids.len(),
        }
    }

    /// Flatten into tagged edits, in application order
    pub fn edits(&self) -> Vec<Edit> {
        let mut out = Vec::new();
        if !self.removed_sections.is_empty() {
            out.push(Edit::RemoveSections {
                range: self.removed_sections.clone(),
            });
        }
        if !self.added_sections.is_empty() {
            out.push(Edit::AddSections {
                range: self.added_sections.clone(),
            });
        }
        out.extend(
            self.removed_model_paths
                .iter()
                .map(|&path| Edit::RemoveItem { path }),
        );
        out.extend(
            self.added_model_paths
                .iter()
                .map(|&path| Edit::AddItem { path }),
        );
        out.extend(
            self.moved_model_paths
                .iter()
                .map(|m| Edit::MoveItem {
                    from: m.from,
                    to: m.to,
                }),
        );
        out.extend(
            self.updated_model_paths
                .iter()
                .map(|&path| Edit::UpdateItem { path }),
        );
        out
    }
}
