use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::store::DocumentError;

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Revision following `previous` for a document holding `body`.
/// Shaped as `<generation>-<digest>`, the digest being 32 hex chars.
pub(crate) fn next(previous: Option<&str>, body: &Value) -> String {
    let generation = previous.and_then(generation).unwrap_or(0) + 1;

    let mut hasher = Sha256::new();
    hasher.update(previous.unwrap_or_default().as_bytes());
    hasher.update(body.to_string().as_bytes());
    let digest: String = hasher
        .finalize()
        .iter()
        .take(16)
        .map(|b| format!("{b:02x}"))
        .collect();

    format!("{generation}-{digest}")
}

fn generation(rev: &str) -> Option<u64> {
    rev.split_once('-').and_then(|(g, _)| g.parse().ok())
}

/// Compares the stored revision with the one supplied by the writer.
pub(crate) fn check(current: Option<&str>, supplied: Option<&str>) -> Result<(), DocumentError> {
    match (current, supplied) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(DocumentError::NotFound),
        (Some(current), Some(supplied)) if current == supplied => Ok(()),
        (Some(_), _) => Err(DocumentError::Conflict),
    }
}
