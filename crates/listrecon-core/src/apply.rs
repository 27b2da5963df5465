//! Edit-set application mirror
//!
//! Applies an [`EditSet`] to a copy of the old generation the way a list
//! widget applies a batch update, reading inserted and updated content from
//! the new generation as the widget would read its data source.
//!
//! ## Contract
//!
//! 1. `removed_sections` drops sections from the tail, `added_sections`
//!    appends empty ones.
//! 2. Removal paths and move `from` paths address the **old** generation.
//! 3. Insertion paths, move `to` paths and update paths address the **new**
//!    generation.
//! 4. Old items that are neither removed, moved, nor inside a removed section
//!    keep their relative order and fill the positions left unclaimed.
//!
//! Any edit-set that breaks the contract is rejected with a typed error
//! instead of producing a corrupt mirror.
//!
//! ## Example
//!
//! ```
//! use listrecon_core::{apply_edit_set, ModelIdentity, ReconEngine};
//!
//! let old = vec![vec![ModelIdentity::new("a", 0u64), ModelIdentity::new("b", 0u64)]];
//! let new = vec![vec![ModelIdentity::new("b", 0u64), ModelIdentity::new("c", 0u64)]];
//!
//! let mut engine = ReconEngine::new();
//! engine.update(&old);
//! let edits = engine.update(&new);
//!
//! assert_eq!(apply_edit_set(&old, &new, &edits).unwrap(), new);
//! ```

use crate::diff::EditSet;
use crate::errors::{EditStage, ReconError, Result};
use crate::model::{Generation, Identifiable};
use crate::schema::OP_APPLY;
use crate::{log_op_end, log_op_error, log_op_start};
use listrecon_core_types::Path;
use std::time::Instant;

/// Apply `edits` to a mirror of `old`, taking new content from `new`
///
/// # Errors
///
/// - `SectionRangeNotAtTail`, `SectionCountMismatch`: section edits do not
///   turn `old.len()` sections into `new.len()`
/// - `PathOutOfRange`: a path addresses no position in its generation
/// - `SlotConflict`: two edits vacate or claim the same position
/// - `SectionLengthMismatch`: survivors and insertions do not fill a section
/// - `ContentMismatch`: an update path holds a different item than the new
///   generation has there
pub fn apply_edit_set<T>(old: &[Vec<T>], new: &[Vec<T>], edits: &EditSet) -> Result<Generation<T>>
where
    T: Identifiable + Clone,
{
    let started = Instant::now();
    log_op_start!(OP_APPLY, old_sections = old.len(), new_sections = new.len());

    match mirror(old, new, edits) {
        Ok(applied) => {
            log_op_end!(OP_APPLY, duration_ms = started.elapsed().as_millis() as u64);
            Ok(applied)
        }
        Err(err) => {
            log_op_error!(
                OP_APPLY,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Apply `edits` and check the mirror reproduces `new` id-for-id and
/// version-for-version
///
/// # Errors
///
/// Everything [`apply_edit_set`] reports, plus `ContentMismatch` when an item
/// lands in the wrong place and `StaleVersion` when a changed item was not
/// updated.
pub fn verify_edit_set<T>(old: &[Vec<T>], new: &[Vec<T>], edits: &EditSet) -> Result<()>
where
    T: Identifiable + Clone,
{
    let mirrored = apply_edit_set(old, new, edits)?;
    for (section, (got, want)) in mirrored.iter().zip(new).enumerate() {
        for (item, (got, want)) in got.iter().zip(want).enumerate() {
            let path = Path::new(section, item);
            if got.id() != want.id() {
                return Err(ReconError::ContentMismatch {
                    path,
                    expected: want.id().clone(),
                    found: got.id().clone(),
                });
            }
            if got.version() != want.version() {
                return Err(ReconError::StaleVersion {
                    path,
                    id: got.id().clone(),
                });
            }
        }
    }
    Ok(())
}

fn mirror<T>(old: &[Vec<T>], new: &[Vec<T>], edits: &EditSet) -> Result<Generation<T>>
where
    T: Identifiable + Clone,
{
    let section_count = apply_section_edits(old.len(), edits)?;
    if section_count != new.len() {
        return Err(ReconError::SectionCountMismatch {
            expected: new.len(),
            actual: section_count,
        });
    }
    let kept_sections = old.len().min(section_count);

    let mut vacated: Vec<Vec<bool>> = old.iter().map(|s| vec![false; s.len()]).collect();
    for &path in &edits.removed_model_paths {
        vacate(&mut vacated, path, EditStage::Remove)?;
    }
    let mut moved = Vec::with_capacity(edits.moved_model_paths.len());
    for m in &edits.moved_model_paths {
        vacate(&mut vacated, m.from, EditStage::MoveFrom)?;
        moved.push((m.to, old[m.from.section][m.from.item].clone()));
    }

    let mut slots: Vec<Vec<Option<T>>> = new
        .iter()
        .map(|s| (0..s.len()).map(|_| None).collect())
        .collect();
    for &path in &edits.added_model_paths {
        let item = lookup(new, path, EditStage::Add)?.clone();
        claim(&mut slots, path, item, EditStage::Add)?;
    }
    for (to, item) in moved {
        claim(&mut slots, to, item, EditStage::MoveTo)?;
    }

    for (section, section_slots) in slots.iter_mut().enumerate() {
        let survivors: Vec<&T> = if section < kept_sections {
            old[section]
                .iter()
                .zip(&vacated[section])
                .filter(|&(_, &gone)| !gone)
                .map(|(item, _)| item)
                .collect()
        } else {
            Vec::new()
        };

        let open = section_slots.iter().filter(|s| s.is_none()).count();
        if open != survivors.len() {
            return Err(ReconError::SectionLengthMismatch {
                section,
                expected: section_slots.len(),
                actual: section_slots.len() - open + survivors.len(),
            });
        }

        let mut survivors = survivors.into_iter();
        for slot in section_slots.iter_mut().filter(|s| s.is_none()) {
            *slot = survivors.next().cloned();
        }
    }

    let mut applied: Generation<T> = slots
        .into_iter()
        .map(|s| s.into_iter().flatten().collect())
        .collect();

    // An update refreshes content in place; it never changes which item sits there.
    for &path in &edits.updated_model_paths {
        let fresh = lookup(new, path, EditStage::Update)?;
        let current = &mut applied[path.section][path.item];
        if current.id() != fresh.id() {
            return Err(ReconError::ContentMismatch {
                path,
                expected: fresh.id().clone(),
                found: current.id().clone(),
            });
        }
        *current = fresh.clone();
    }

    Ok(applied)
}

/// Section count after tail removal then tail insertion
fn apply_section_edits(old_count: usize, edits: &EditSet) -> Result<usize> {
    let mut count = old_count;
    let removed = &edits.removed_sections;
    if !removed.is_empty() {
        if removed.end != count {
            return Err(ReconError::SectionRangeNotAtTail {
                start: removed.start,
                end: removed.end,
                section_count: count,
            });
        }
        count = removed.start;
    }
    let added = &edits.added_sections;
    if !added.is_empty() {
        if added.start != count {
            return Err(ReconError::SectionRangeNotAtTail {
                start: added.start,
                end: added.end,
                section_count: count,
            });
        }
        count = added.end;
    }
    Ok(count)
}

fn lookup<T>(generation: &[Vec<T>], path: Path, stage: EditStage) -> Result<&T> {
    generation
        .get(path.section)
        .and_then(|s| s.get(path.item))
        .ok_or(ReconError::PathOutOfRange { stage, path })
}

fn vacate(vacated: &mut [Vec<bool>], path: Path, stage: EditStage) -> Result<()> {
    let slot = vacated
        .get_mut(path.section)
        .and_then(|s| s.get_mut(path.item))
        .ok_or(ReconError::PathOutOfRange { stage, path })?;
    if *slot {
        return Err(ReconError::SlotConflict { stage, path });
    }
    *slot = true;
    Ok(())
}

fn claim<T>(slots: &mut [Vec<Option<T>>], path: Path, item: T, stage: EditStage) -> Result<()> {
    let slot = slots
        .get_mut(path.section)
        .and_then(|s| s.get_mut(path.item))
        .ok_or(ReconError::PathOutOfRange { stage, path })?;
    if slot.is_some() {
        return Err(ReconError::SlotConflict { stage, path });
    }
    *slot = Some(item);
    Ok(())
}
