//! Privileged executor errors.

use navel_protocols::TabId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackgroundError {
    /// The message `kind` has no handler. Fatal for the executor.
    #[error("Unknown command sent to background executor: {0}")]
    UnknownCommand(String),

    #[error("Malformed {kind} message: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No tab with id {0}")]
    NoSuchTab(TabId),
}

impl BackgroundError {
    /// Whether the executor must stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BackgroundError::UnknownCommand(_))
    }
}
