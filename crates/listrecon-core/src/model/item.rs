//! Items as the reconciliation engine sees them
//!
//! The engine is generic over anything that can report an `(ItemId, Version)`
//! pair. [`ModelIdentity`] is the plain carrier used by tooling and tests.

use listrecon_core_types::{ItemId, Version};
use serde::{Deserialize, Serialize};

/// One full snapshot of a sectioned collection
pub type Generation<T> = Vec<Vec<T>>;

/// An item that exposes a stable identity and a content version
pub trait Identifiable {
    fn id(&self) -> &ItemId;
    fn version(&self) -> Version;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> &ItemId {
        (**self).id()
    }

    fn version(&self) -> Version {
        (**self).version()
    }
}

/// Bare `(id, version)` item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelIdentity {
    pub id: ItemId,
    pub version: Version,
}

impl ModelIdentity {
    pub fn new(id: impl Into<ItemId>, version: impl Into<Version>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl Identifiable for ModelIdentity {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn version(&self) -> Version {
        self.version
    }
}
