//! Per-generation snapshot index.
//!
//! A [`Snapshot`] mirrors a generation's shape with one [`Record`] per item and
//! indexes every id to the paths holding it. It is built in a single linear
//! pass and cannot fail.

use crate::model::Identifiable;
use listrecon_core_types::{ItemId, Path, Version};
use std::collections::HashMap;

/// Positional record of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub(crate) id: ItemId,
    pub(crate) version: Version,
    /// Cleared once the record is matched in place, moved or removed
    pub(crate) active: bool,
}

/// Every path holding an id, plus the version of its first occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdInfo {
    pub(crate) paths: Vec<Path>,
    pub(crate) version: Version,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Snapshot {
    pub(crate) table: Vec<Vec<Record>>,
    pub(crate) index: HashMap<ItemId, IdInfo>,
}

impl Snapshot {
    pub(crate) fn build<T: Identifiable>(sections: &[Vec<T>]) -> Self {
        let mut index: HashMap<ItemId, IdInfo> = HashMap::new();
        let table = sections
            .iter()
            .enumerate()
            .map(|(section, items)| {
                items
                    .iter()
                    .enumerate()
                    .map(|(item, model)| {
                        let id = model.id().clone();
                        let version = model.version();
                        // Duplicates keep the first version; agreement is not checked.
                        index
                            .entry(id.clone())
                            .or_insert_with(|| IdInfo {
                                paths: Vec::new(),
                                version,
                            })
                            .paths
                            .push(Path::new(section, item));
                        Record {
                            id,
                            version,
                            active: true,
                        }
                    })
                    .collect()
            })
            .collect();

        Self { table, index }
    }

    pub(crate) fn section_count(&self) -> usize {
        self.table.len()
    }

    /// Length of a section; sections past the end count as empty
    pub(crate) fn section_len(&self, section: usize) -> usize {
        self.table.get(section).map_or(0, Vec::len)
    }

    pub(crate) fn item_count(&self) -> usize {
        self.table.iter().map(Vec::len).sum()
    }

    pub(crate) fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn record(&self, path: Path) -> &Record {
        &self.table[path.section][path.item]
    }

    pub(crate) fn record_mut(&mut self, path: Path) -> &mut Record {
        &mut self.table[path.section][path.item]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelIdentity;

    fn item(id: &str, version: u64) -> ModelIdentity {
        ModelIdentity::new(id, version)
    }

    #[test]
    fn test_build_mirrors_shape() {
        let snapshot = Snapshot::build(&[vec![item("a", 0), item("b", 0)], vec![], vec![item("c", 1)]]);
        assert_eq!(snapshot.section_count(), 3);
        assert_eq!(snapshot.section_len(0), 2);
        assert_eq!(snapshot.section_len(1), 0);
        assert_eq!(snapshot.section_len(7), 0);
        assert_eq!(snapshot.item_count(), 3);
        assert!(snapshot.table.iter().flatten().all(|r| r.active));
    }

    #[test]
    fn test_duplicate_ids_collect_all_paths_in_order() {
        let snapshot = Snapshot::build(&[vec![item("a", 0), item("b", 0)], vec![item("a", 5)]]);
        let info = &snapshot.index[&ItemId::new("a")];
        assert_eq!(info.paths, vec![Path::new(0, 0), Path::new(1, 0)]);
    }

    #[test]
    fn test_duplicate_ids_keep_first_version() {
        let snapshot = Snapshot::build(&[vec![item("a", 1), item("a", 2)]]);
        assert_eq!(snapshot.index[&ItemId::new("a")].version, Version::from(1u64));
        // Positional records keep their own versions.
        assert_eq!(snapshot.record(Path::new(0, 1)).version, Version::from(2u64));
    }

    #[test]
    fn test_empty_generation() {
        let snapshot = Snapshot::build::<ModelIdentity>(&[]);
        assert_eq!(snapshot.section_count(), 0);
        assert!(!snapshot.contains(&ItemId::new("a")));
    }
}
