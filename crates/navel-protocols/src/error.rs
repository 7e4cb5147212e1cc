//! Boundary errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Privileged executor disconnected")]
    Disconnected,

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}
