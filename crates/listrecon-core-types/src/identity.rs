//! Identity types for items in a reconciled collection
//!
//! Every item carries an `(ItemId, Version)` pair. Equal ids mean "same
//! logical entity"; equal versions mean "identical visible content". Both are
//! opaque to the engine, which only ever compares them for equality.

use serde::{Deserialize, Serialize};

/// Stable, externally assigned identifier of a logical entity
///
/// Ids are duplicate-tolerant: the same id may appear more than once within a
/// single generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque content-equality token
///
/// Wide enough to hold either a 64-bit or a 128-bit content hash. A 128-bit
/// hash produced as two 64-bit halves can be packed with [`Version::from_parts`];
/// [`VersionHasher`](crate::VersionHasher) builds one from item content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u128);

impl Version {
    /// Create a version from a raw 128-bit value
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Pack two 64-bit hash halves into one version
    pub const fn from_parts(hi: u64, lo: u64) -> Self {
        Self(((hi as u128) << 64) | lo as u128)
    }

    /// Split the version back into its 64-bit halves `(hi, lo)`
    pub const fn parts(&self) -> (u64, u64) {
        ((self.0 >> 64) as u64, self.0 as u64)
    }

    /// Get the raw value
    pub const fn raw(&self) -> u128 {
        self.0
    }
}

impl From<u64> for Version {
    fn from(v: u64) -> Self {
        Self(v as u128)
    }
}

impl From<u128> for Version {
    fn from(v: u128) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_from_str_and_string_agree() {
        assert_eq!(ItemId::from("user:1"), ItemId::new(String::from("user:1")));
        assert_eq!(ItemId::from("user:1").as_str(), "user:1");
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::new("a");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
        let back: ItemId = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_version_parts_are_preserved() {
        let v = Version::from_parts(0xdead_beef, 0x0123_4567_89ab_cdef);
        assert_eq!(v.parts(), (0xdead_beef, 0x0123_4567_89ab_cdef));
        assert_ne!(v, Version::from_parts(0, 0x0123_4567_89ab_cdef));
    }

    #[test]
    fn test_version_from_u64_fills_low_half() {
        assert_eq!(Version::from(7u64).parts(), (0, 7));
    }

    #[test]
    fn test_version_display_is_fixed_width_hex() {
        assert_eq!(Version::new(255).to_string().len(), 32);
        assert!(Version::new(255).to_string().ends_with("ff"));
    }
}
