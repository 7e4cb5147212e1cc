//! Errors raised by the page-resident component.

use navel_config::ConfigError;
use navel_protocols::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),

    #[error("Boundary error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
