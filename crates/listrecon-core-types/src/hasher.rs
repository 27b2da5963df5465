//! Streaming content hasher producing [`Version`] tokens
//!
//! Callers mix the fields that make up an item's visible content, in a fixed
//! order, and finish into a 128-bit [`Version`]. Two items hash equal only if
//! the same values were mixed in the same order.
//!
//! Values are mixed as their little-endian bytes, so a `u32` and a `u64`
//! holding the same number hash differently.

use crate::identity::Version;
use xxhash_rust::xxh3::Xxh3;

const SEED: u64 = 0xc4133;

/// Incremental 128-bit hasher for item content
///
/// # Example
///
/// ```
/// use listrecon_core_types::VersionHasher;
///
/// let mut hasher = VersionHasher::new();
/// hasher.mix_u32(7).mix_str("title");
/// let version = hasher.finish();
/// assert_eq!(version, VersionHasher::new().mix_u32(7).mix_str("title").finish());
/// ```
pub struct VersionHasher {
    state: Xxh3,
}

impl VersionHasher {
    pub fn new() -> Self {
        Self {
            state: Xxh3::with_seed(SEED),
        }
    }

    pub fn mix_u8(&mut self, value: u8) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_u16(&mut self, value: u16) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_u32(&mut self, value: u32) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_u64(&mut self, value: u64) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_i8(&mut self, value: i8) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_i16(&mut self, value: i16) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_i32(&mut self, value: i32) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    pub fn mix_i64(&mut self, value: i64) -> &mut Self {
        self.mix_bytes(&value.to_le_bytes())
    }

    /// Mix a 128-bit hash given as two halves, e.g. a nested item's version
    pub fn mix_u64_pair(&mut self, hash1: u64, hash2: u64) -> &mut Self {
        self.mix_u64(hash1).mix_u64(hash2)
    }

    /// Mix another version, so composite items can hash their children
    pub fn mix_version(&mut self, version: Version) -> &mut Self {
        let (hi, lo) = version.parts();
        self.mix_u64_pair(hi, lo)
    }

    /// Mix a string, length-prefixed so adjacent strings cannot run together
    pub fn mix_str(&mut self, value: &str) -> &mut Self {
        self.mix_u64(value.len() as u64).mix_bytes(value.as_bytes())
    }

    /// Mix raw bytes with no length prefix
    pub fn mix_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.state.update(bytes);
        self
    }

    /// Produce the version for everything mixed so far
    ///
    /// Does not reset the hasher; mixing may continue afterwards.
    pub fn finish(&self) -> Version {
        let hash = self.state.digest128();
        Version::from_parts((hash >> 64) as u64, hash as u64)
    }
}

impl Default for VersionHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VersionHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionHasher")
            .field("current", &self.finish())
            .finish()
    }
}
