//! Bounded ring of recent log entries.

use std::collections::VecDeque;
use std::io::{self, Write};

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use tracing::Level;

/// Number of entries retained by default.
pub const MAX_LOG_ENTRIES: usize = 25;

/// One captured log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Emitting component (the event target).
    pub tag: String,
    pub level: Level,
    pub message: String,
    /// Structured fields other than the message, in recording order.
    pub fields: Vec<(String, String)>,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Render as `HH:MM:SS.mmm     tag | message key=value`.
    pub fn format_line(&self) -> String {
        let time = self.timestamp.format("%H:%M:%S%.3f").to_string();
        let mut line = format!("{:<16}{} | {}", time, self.tag, self.message);
        for (name, value) in &self.fields {
            line.push(' ');
            line.push_str(name);
            line.push('=');
            line.push_str(value);
        }
        line
    }
}

/// Fixed-capacity log ring. The oldest entry is evicted on overflow.
#[derive(Debug)]
pub struct LogBuffer {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of retained entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Write every retained entry to `out`. Dumping does not record new
    /// entries.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in self.entries() {
            writeln!(out, "{}", entry.format_line())?;
        }
        out.flush()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
