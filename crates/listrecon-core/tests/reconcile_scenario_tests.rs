//! Scenario tests for the reconciliation engine.
//!
//! Every scenario also checks the edit-set against the application mirror.

mod common;

use common::{generation, paths, unversioned};
use listrecon_core::apply::verify_edit_set;
use listrecon_core::{
    EditSet, Identifiable, ItemId, ModelIdentity, Move, Path, ReconEngine, Version,
    VersionHasher,
};
use std::collections::BTreeSet;

fn ids(names: &[&str]) -> BTreeSet<ItemId> {
    names.iter().map(|&n| ItemId::new(n)).collect()
}

/// Feed `old` then `new` through a fresh engine and return the second edit-set
fn diff(old: &[Vec<ModelIdentity>], new: &[Vec<ModelIdentity>]) -> EditSet {
    let mut engine = ReconEngine::new();
    engine.update(old);
    let edits = engine.update(new);
    verify_edit_set(old, new, &edits).unwrap();
    edits
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn test_repeated_generation_yields_empty_edit_set() {
    let g = generation(&[&[("a", 0), ("b", 1)], &[], &[("a", 2), ("c", 0)]]);
    let edits = diff(&g, &g);
    assert!(edits.is_empty());
    assert!(!edits.contains_first_add_in_section);
    assert!(!edits.contains_last_remove_in_section);
}

#[test]
fn test_empty_to_empty_is_empty() {
    let mut engine = ReconEngine::new();
    let edits = engine.update::<ModelIdentity>(&[]);
    assert!(edits.is_empty());
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[test]
fn test_first_generation_adds_everything() {
    let mut engine = ReconEngine::new();
    let g = unversioned(&[&["a"], &["b", "c"]]);
    let edits = engine.update(&g);
    assert_eq!(edits.added_sections, 0..2);
    assert_eq!(edits.removed_sections, 0..0);
    assert_eq!(edits.added_model_paths, paths(&[(0, 0), (1, 0), (1, 1)]));
    verify_edit_set(&[], &g, &edits).unwrap();
}

#[test]
fn test_sections_grow_at_tail() {
    let edits = diff(&unversioned(&[&["a"]]), &unversioned(&[&["a"], &[], &["b"]]));
    assert_eq!(edits.added_sections, 1..3);
    assert_eq!(edits.added_model_paths, paths(&[(2, 0)]));
    assert!(edits.contains_first_add_in_section);
}

#[test]
fn test_item_added_in_new_tail_section_is_a_first_add() {
    let edits = diff(&unversioned(&[&["A"]]), &unversioned(&[&["A"], &["B"]]));
    assert_eq!(edits.added_sections, 1..2);
    assert_eq!(edits.added_model_paths, paths(&[(1, 0)]));
    assert!(edits.contains_first_add_in_section);
    assert!(!edits.contains_last_remove_in_section);
}

#[test]
fn test_empty_tail_section_is_not_a_first_add() {
    let edits = diff(&unversioned(&[&["A"]]), &unversioned(&[&["A"], &[]]));
    assert_eq!(edits.added_sections, 1..2);
    assert!(!edits.contains_first_add_in_section);
}

#[test]
fn test_sections_shrink_at_tail() {
    let edits = diff(&unversioned(&[&["a"], &["b"], &[]]), &unversioned(&[&["a"]]));
    assert_eq!(edits.removed_sections, 1..3);
    assert!(edits.removed_model_paths.is_empty());
    assert_eq!(edits.removed_model_ids, ids(&["b"]));
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[test]
fn test_insertions_indexed_after_deletions() {
    let edits = diff(
        &unversioned(&[&["A", "B", "C", "D", "E"]]),
        &unversioned(&[&["B", "F", "C", "G", "D"]]),
    );
    assert_eq!(edits.removed_model_paths, paths(&[(0, 0), (0, 4)]));
    assert_eq!(edits.added_model_paths, paths(&[(0, 1), (0, 3)]));
    assert_eq!(edits.removed_model_ids, ids(&["A", "E"]));
    assert!(edits.moved_model_paths.is_empty());
    assert!(edits.updated_model_paths.is_empty());
}

#[test]
fn test_move_and_update_fire_together() {
    let edits = diff(
        &generation(&[&[("A", 0), ("B", 0)]]),
        &generation(&[&[("B", 0), ("A", 1)]]),
    );
    assert_eq!(
        edits.moved_model_paths,
        vec![Move::new(Path::new(0, 1), Path::new(0, 0))]
    );
    assert_eq!(edits.updated_model_paths, paths(&[(0, 1)]));
    assert!(edits.added_model_paths.is_empty());
    assert!(edits.removed_model_paths.is_empty());
}

#[test]
fn test_moved_item_with_new_version_is_also_updated() {
    let edits = diff(
        &generation(&[&[("A", 0), ("B", 0)]]),
        &generation(&[&[("B", 4), ("A", 0)]]),
    );
    assert_eq!(
        edits.moved_model_paths,
        vec![Move::new(Path::new(0, 1), Path::new(0, 0))]
    );
    assert_eq!(edits.updated_model_paths, paths(&[(0, 0)]));
}

#[test]
fn test_item_moves_between_sections() {
    let edits = diff(&unversioned(&[&["A"], &[]]), &unversioned(&[&[], &["A"]]));
    assert_eq!(
        edits.moved_model_paths,
        vec![Move::new(Path::new(0, 0), Path::new(1, 0))]
    );
    assert!(edits.contains_first_add_in_section);
    assert!(edits.contains_last_remove_in_section);
    assert!(edits.added_model_paths.is_empty());
    assert!(edits.removed_model_paths.is_empty());
    assert!(edits.removed_model_ids.is_empty());
}

#[test]
fn test_items_swap_sections() {
    let edits = diff(
        &unversioned(&[&["A", "B"], &["C"]]),
        &unversioned(&[&["C", "B"], &["A"]]),
    );
    assert!(edits.added_model_paths.is_empty());
    assert!(edits.removed_model_paths.is_empty());
    // B is claimed through a move even though it lands on its old index.
    assert_eq!(
        edits.moved_model_paths,
        vec![
            Move::new(Path::new(1, 0), Path::new(0, 0)),
            Move::new(Path::new(0, 1), Path::new(0, 1)),
            Move::new(Path::new(0, 0), Path::new(1, 0)),
        ]
    );
}

#[test]
fn test_section_cleared_then_refilled() {
    let mut engine = ReconEngine::new();
    let full = unversioned(&[&["A", "B"]]);
    let empty = unversioned(&[&[]]);

    engine.update(&full);
    let cleared = engine.update(&empty);
    assert_eq!(cleared.removed_model_paths, paths(&[(0, 0), (0, 1)]));
    assert!(cleared.contains_last_remove_in_section);
    assert!(!cleared.contains_first_add_in_section);
    verify_edit_set(&full, &empty, &cleared).unwrap();

    let refilled = engine.update(&full);
    assert_eq!(refilled.added_model_paths, paths(&[(0, 0), (0, 1)]));
    assert!(refilled.contains_first_add_in_section);
    assert!(!refilled.contains_last_remove_in_section);
    assert!(refilled.removed_model_ids.is_empty());
    verify_edit_set(&empty, &full, &refilled).unwrap();
}

// ---------------------------------------------------------------------------
// Duplicate ids
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_ids_shrink_one_occurrence_at_a_time() {
    let mut engine = ReconEngine::new();
    let two = unversioned(&[&["A", "A"]]);
    let one = unversioned(&[&["A"]]);
    let none = unversioned(&[&[]]);

    engine.update(&two);

    let edits = engine.update(&one);
    assert_eq!(edits.removed_model_paths.len(), 1);
    assert!(edits.removed_model_ids.is_empty());
    verify_edit_set(&two, &one, &edits).unwrap();

    let edits = engine.update(&none);
    assert_eq!(edits.removed_model_paths, paths(&[(0, 0)]));
    assert_eq!(edits.removed_model_ids, ids(&["A"]));
    verify_edit_set(&one, &none, &edits).unwrap();
}

#[test]
fn test_extra_duplicate_falls_back_to_insertion() {
    let edits = diff(&unversioned(&[&["A"]]), &unversioned(&[&["A", "A"]]));
    assert_eq!(edits.added_model_paths, paths(&[(0, 1)]));
    assert!(edits.moved_model_paths.is_empty());
}

#[test]
fn test_duplicate_claims_first_active_occurrence() {
    let edits = diff(
        &unversioned(&[&["A", "B", "A"]]),
        &unversioned(&[&["B", "A", "A"]]),
    );
    assert_eq!(
        edits.moved_model_paths,
        vec![Move::new(Path::new(0, 1), Path::new(0, 0))]
    );
    assert!(edits.added_model_paths.is_empty());
    assert!(edits.removed_model_paths.is_empty());
}

#[test]
fn test_duplicate_spread_over_sections() {
    let edits = diff(
        &unversioned(&[&["A", "B"], &["A"]]),
        &unversioned(&[&["B"], &["A", "A"]]),
    );
    assert!(edits.removed_model_ids.is_empty());
    assert!(edits.removed_model_paths.is_empty());
    assert!(edits.added_model_paths.is_empty());
    // The straggler A in section 0 is claimed by section 1's second A.
    assert_eq!(
        edits.moved_model_paths,
        vec![
            Move::new(Path::new(0, 1), Path::new(0, 0)),
            Move::new(Path::new(0, 0), Path::new(1, 1)),
        ]
    );
}

#[test]
fn test_duplicates_with_diverging_versions() {
    let edits = diff(
        &generation(&[&[("A", 0), ("A", 1)]]),
        &generation(&[&[("A", 1), ("A", 0)]]),
    );
    assert_eq!(edits.updated_model_paths, paths(&[(0, 0), (0, 1)]));
}

// ---------------------------------------------------------------------------
// Disappearing and reappearing ids
// ---------------------------------------------------------------------------

#[test]
fn test_id_reappears_after_absence() {
    let mut engine = ReconEngine::new();
    let with = unversioned(&[&["A", "B"]]);
    let without = unversioned(&[&["B"]]);

    engine.update(&with);
    let gone = engine.update(&without);
    assert_eq!(gone.removed_model_ids, ids(&["A"]));

    let back = engine.update(&with);
    assert_eq!(back.added_model_paths, paths(&[(0, 0)]));
    assert!(back.removed_model_ids.is_empty());
    verify_edit_set(&without, &with, &back).unwrap();
}

#[test]
fn test_removed_ids_are_id_scoped() {
    let edits = diff(
        &unversioned(&[&["A", "B"], &["A"]]),
        &unversioned(&[&["B"], &[]]),
    );
    assert_eq!(edits.removed_model_paths.len(), 2);
    assert_eq!(edits.removed_model_ids, ids(&["A"]));
}

// ---------------------------------------------------------------------------
// Hashed content versions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Row {
    id: ItemId,
    version: Version,
}

impl Row {
    fn new(id: &str, title: &str, unread: u32) -> Self {
        let version = VersionHasher::new().mix_str(title).mix_u32(unread).finish();
        Self {
            id: ItemId::new(id),
            version,
        }
    }
}

impl Identifiable for Row {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn version(&self) -> Version {
        self.version
    }
}

#[test]
fn test_hashed_content_change_is_an_update() {
    let old = vec![vec![Row::new("inbox", "Inbox", 3), Row::new("sent", "Sent", 0)]];
    let same = vec![vec![Row::new("inbox", "Inbox", 3), Row::new("sent", "Sent", 0)]];
    let changed = vec![vec![Row::new("inbox", "Inbox", 4), Row::new("sent", "Sent", 0)]];

    let mut engine = ReconEngine::new();
    engine.update(&old);
    assert!(engine.update(&same).is_empty());

    let edits = engine.update(&changed);
    assert_eq!(edits.updated_model_paths, paths(&[(0, 0)]));
    assert!(edits.moved_model_paths.is_empty());
    verify_edit_set(&same, &changed, &edits).unwrap();
}
