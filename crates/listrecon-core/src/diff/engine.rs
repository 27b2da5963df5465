//! Stateful reconciliation engine.
//!
//! [`ReconEngine::update`] diffs a new generation against the retained
//! snapshot of the previous one and returns an [`EditSet`].
//!
//! ## Algorithm
//!
//! Sections carry no identity, so section-level changes are limited to growth
//! or shrinkage at the tail. Each section of the new generation is then merged
//! against the old section of the same index with two cursors, `q` over old
//! records and `t` over new positions:
//!
//! - equal ids match in place (plus an update when versions differ);
//! - an old id missing from the new generation is removed;
//! - a new id missing from the old generation is added;
//! - otherwise the new id claims its first still-active old occurrence as a
//!   move source, or is inserted when every occurrence is already consumed.
//!
//! Old records left over once a new section is exhausted are stragglers: a
//! later section may still claim them through a move, so they are only
//! removed in a final sweep.

use crate::diff::edit_set::{EditSet, Move};
use crate::diff::snapshot::{Record, Snapshot};
use crate::model::Identifiable;
use crate::schema::OP_UPDATE;
use crate::{log_op_end, log_op_start};
use listrecon_core_types::{ItemId, Path, Version};
use std::time::Instant;

/// Remembers the last generation and diffs each new one against it
///
/// The retained snapshot starts as an empty generation (zero sections) and is
/// only reachable through [`ReconEngine::update`]. `update` takes `&mut self`;
/// the engine is meant to be driven from one thread of control.
///
/// # Example
///
/// ```
/// use listrecon_core::{ModelIdentity, ReconEngine};
///
/// let mut engine = ReconEngine::new();
/// let first = engine.update(&[vec![ModelIdentity::new("a", 0u64)]]);
/// assert_eq!(first.added_sections, 0..1);
///
/// let second = engine.update(&[vec![ModelIdentity::new("a", 0u64)]]);
/// assert!(second.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ReconEngine {
    snapshot: Snapshot,
}

impl ReconEngine {
    /// Create an engine whose retained snapshot is an empty generation
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections in the retained generation
    pub fn section_count(&self) -> usize {
        self.snapshot.section_count()
    }

    /// Number of items across all sections of the retained generation
    pub fn item_count(&self) -> usize {
        self.snapshot.item_count()
    }

    /// Version indexed for `id` in the retained generation
    ///
    /// With duplicate ids this is the version of the first occurrence.
    pub fn indexed_version(&self, id: &ItemId) -> Option<Version> {
        self.snapshot.index.get(id).map(|info| info.version)
    }

    /// Every path holding `id` in the retained generation, in order
    pub fn paths_of(&self, id: &ItemId) -> &[Path] {
        self.snapshot
            .index
            .get(id)
            .map(|info| info.paths.as_slice())
            .unwrap_or(&[])
    }

    /// Diff `generation` against the retained snapshot, then retain it
    ///
    /// Every input is valid, including empty generations and duplicate ids.
    pub fn update<T: Identifiable>(&mut self, generation: &[Vec<T>]) -> EditSet {
        let started = Instant::now();
        let new = Snapshot::build(generation);
        log_op_start!(
            OP_UPDATE,
            old_sections = self.snapshot.section_count(),
            new_sections = new.section_count(),
            new_items = new.item_count()
        );

        let old = std::mem::replace(&mut self.snapshot, new);
        let edits = Reconciler::new(old, &self.snapshot).run();

        log_op_end!(
            OP_UPDATE,
            duration_ms = started.elapsed().as_millis() as u64,
            counts = edits.summary()
        );
        edits
    }
}

/// One reconciliation pass; consumes the old snapshot's `active` flags
struct Reconciler<'a> {
    old: Snapshot,
    new: &'a Snapshot,
    edits: EditSet,
    stragglers: Vec<Path>,
}

impl<'a> Reconciler<'a> {
    fn new(old: Snapshot, new: &'a Snapshot) -> Self {
        Self {
            old,
            new,
            edits: EditSet::default(),
            stragglers: Vec::new(),
        }
    }

    fn run(mut self) -> EditSet {
        let old_count = self.old.section_count();
        let new_count = self.new.section_count();
        if new_count > old_count {
            self.edits.added_sections = old_count..new_count;
        } else if new_count < old_count {
            self.edits.removed_sections = new_count..old_count;
        }

        for section in 0..new_count {
            self.reconcile_section(section);
        }

        self.sweep_stragglers();
        self.collect_removed_section_ids();
        self.derive_flags();
        self.edits
    }

    fn reconcile_section(&mut self, section: usize) {
        let new = self.new;
        let new_items = &new.table[section];
        let old_len = self.old.section_len(section);
        let (mut q, mut t) = (0, 0);

        loop {
            match (q < old_len, t < new_items.len()) {
                (true, true) => {
                    let old_path = Path::new(section, q);
                    let new_record = &new_items[t];
                    let old_record = self.old.record(old_path);

                    if !old_record.active {
                        q += 1;
                    } else if old_record.id == new_record.id {
                        let changed = old_record.version != new_record.version;
                        self.old.record_mut(old_path).active = false;
                        if changed {
                            self.edits.updated_model_paths.push(Path::new(section, t));
                        }
                        q += 1;
                        t += 1;
                    } else if !new.contains(&old_record.id) {
                        self.remove(old_path);
                        q += 1;
                    } else if !self.old.contains(&new_record.id) {
                        self.edits.added_model_paths.push(Path::new(section, t));
                        t += 1;
                    } else {
                        self.move_or_insert(new_record, Path::new(section, t));
                        t += 1;
                    }
                }
                (true, false) => {
                    self.stragglers.push(Path::new(section, q));
                    q += 1;
                }
                (false, true) => {
                    let new_record = &new_items[t];
                    if self.old.contains(&new_record.id) {
                        self.move_or_insert(new_record, Path::new(section, t));
                    } else {
                        self.edits.added_model_paths.push(Path::new(section, t));
                    }
                    t += 1;
                }
                (false, false) => break,
            }
        }
    }

    /// Claim the first active old occurrence of `new_record.id` as a move
    /// source for `to`, or insert at `to` when none is left.
    fn move_or_insert(&mut self, new_record: &Record, to: Path) {
        let old = &self.old;
        let found = old.index.get(&new_record.id).and_then(|info| {
            info.paths
                .iter()
                .copied()
                .find(|&path| old.record(path).active)
        });

        match found {
            Some(from) => {
                let record = self.old.record_mut(from);
                record.active = false;
                if record.version != new_record.version {
                    self.edits.updated_model_paths.push(to);
                }
                self.edits.moved_model_paths.push(Move::new(from, to));
            }
            None => self.edits.added_model_paths.push(to),
        }
    }

    fn remove(&mut self, path: Path) {
        let record = self.old.record_mut(path);
        record.active = false;
        if !self.new.contains(&record.id) {
            self.edits.removed_model_ids.insert(record.id.clone());
        }
        self.edits.removed_model_paths.push(path);
    }

    fn sweep_stragglers(&mut self) {
        let stragglers = std::mem::take(&mut self.stragglers);
        let mut removed = 0usize;
        for path in stragglers {
            if self.old.record(path).active {
                self.remove(path);
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::debug!(removed, "removed unclaimed stragglers");
        }
    }

    /// Items left inside removed tail sections go away with their section;
    /// only their ids are reported.
    fn collect_removed_section_ids(&mut self) {
        let new = self.new;
        for record in self.old.table.iter().skip(new.section_count()).flatten() {
            if !new.contains(&record.id) {
                self.edits.removed_model_ids.insert(record.id.clone());
            }
        }
    }

    /// Sections past the end of the old generation count as empty, so a
    /// populated tail section sets the first-add flag. Removed tail sections
    /// never set the last-remove flag; the section range covers them.
    fn derive_flags(&mut self) {
        for section in 0..self.new.section_count() {
            let before = self.old.section_len(section);
            let after = self.new.section_len(section);
            if before == 0 && after > 0 {
                self.edits.contains_first_add_in_section = true;
            }
            if before > 0 && after == 0 {
                self.edits.contains_last_remove_in_section = true;
            }
        }
    }
}
