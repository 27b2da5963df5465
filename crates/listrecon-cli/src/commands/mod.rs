pub mod diff;
pub mod replay;

use listrecon_core::{ExError, ExErrorKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read and parse a JSON document, tagging failures with `op`
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, op: &str) -> Result<T, ExError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op(op)
            .with_message(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op(op)
            .with_message(format!("{} is not a valid generation file: {}", path.display(), e))
    })
}

/// Render `value` as JSON for stdout
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool, op: &str) -> Result<String, ExError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op(op)
            .with_message(e.to_string())
    })
}
