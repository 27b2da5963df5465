//! Core types shared across listrecon facilities
//!
//! This crate provides the foundational value types used by the
//! reconciliation engine, its edit-set model and the logging facility:
//!
//! - **Identity types**: ItemId, Version
//! - **Content hashing**: VersionHasher, a streaming 128-bit hasher for versions
//! - **Positions**: Path
//! - **Schema constants**: Canonical field keys and event names

pub mod hasher;
pub mod identity;
pub mod path;
pub mod schema;

pub use hasher::VersionHasher;
pub use identity::{ItemId, Version};
pub use path::Path;
