//! # Navel Logging
//!
//! Structured logging for every Navel component.
//!
//! Besides the usual console and file outputs, the most recent events are
//! kept in a [`LogBuffer`] so they can be dumped on demand (the DumpLogs
//! command) without enabling verbose output up front.

mod buffer;
mod init;
mod layer;

pub use buffer::{LogBuffer, LogEntry, MAX_LOG_ENTRIES};
pub use init::{init_tracing, LoggingError};
pub use layer::RingBufferLayer;
