//! Transport encoding for the binary query/subscription variants: the
//! snapshot serialized to JSON and base64-encoded. Same data as the
//! plain endpoints, different wire shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a snapshot as base64(JSON array).
pub fn encode(snapshot: &[String]) -> Result<String, serde_json::Error> {
    Ok(STANDARD.encode(serde_json::to_vec(snapshot)?))
}

/// Decode a payload produced by [`encode`].
pub fn decode(payload: &str) -> Result<Vec<String>, DecodeError> {
    let bytes = STANDARD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}
