//! Two-level positions within a sectioned collection

use serde::{Deserialize, Serialize};

/// Position of an item: `(section, item)`
///
/// Cheaper than a generic multi-level index path; ordering is section-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Path {
    pub section: usize,
    pub item: usize,
}

impl Path {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl From<(usize, usize)> for Path {
    fn from((section, item): (usize, usize)) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.section, self.item)
    }
}
