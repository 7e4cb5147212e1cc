use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use navel_logging::LogBuffer;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::{Command, CommandKind};
use crate::error::ContentError;

/// Where dumped log lines go.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    #[default]
    Stderr,
    /// Captured in memory.
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl LogSink {
    fn write_from(&self, buffer: &LogBuffer) -> io::Result<()> {
        match self {
            LogSink::Stderr => buffer.dump(&mut io::stderr().lock()),
            LogSink::Memory(out) => buffer.dump(&mut *out.lock()),
        }
    }
}

/// Replays the recent log ring.
pub struct DumpLogsCommand {
    buffer: Arc<LogBuffer>,
    sink: LogSink,
}

impl DumpLogsCommand {
    pub fn new(buffer: Arc<LogBuffer>, sink: LogSink) -> Self {
        Self { buffer, sink }
    }
}

#[async_trait]
impl Command for DumpLogsCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::DumpLogs
    }

    async fn execute(&self, _token: Option<CancellationToken>) -> Result<(), ContentError> {
        self.sink.write_from(&self.buffer)?;
        Ok(())
    }
}
