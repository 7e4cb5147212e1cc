//! `tracing` layer that feeds the [`LogBuffer`].

use std::fmt;
use std::sync::Arc;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::buffer::{LogBuffer, LogEntry};

/// Captures every event that passes the subscriber's filter into a shared
/// [`LogBuffer`].
pub struct RingBufferLayer {
    buffer: Arc<LogBuffer>,
}

impl RingBufferLayer {
    pub fn new(buffer: Arc<LogBuffer>) -> Self {
        Self { buffer }
    }
}

#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

impl<S: Subscriber> Layer<S> for RingBufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.buffer.push(LogEntry {
            tag: metadata.target().to_string(),
            level: *metadata.level(),
            message: visitor.message,
            fields: visitor.fields,
            timestamp: Local::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{info, warn, Level};
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_captures_message_and_fields() {
        let buffer = Arc::new(LogBuffer::new());
        let subscriber =
            tracing_subscriber::registry().with(RingBufferLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            info!(count = 3, label = "sa", "Found visible clickable elements");
        });

        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.level, Level::INFO);
        assert_eq!(entry.message, "Found visible clickable elements");
        assert!(entry.tag.starts_with("navel_logging"));
        assert_eq!(
            entry.fields,
            vec![
                ("count".to_string(), "3".to_string()),
                ("label".to_string(), "sa".to_string()),
            ]
        );
    }

    #[test]
    fn test_explicit_target_becomes_tag() {
        let buffer = Arc::new(LogBuffer::new());
        let subscriber =
            tracing_subscriber::registry().with(RingBufferLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            warn!(target: "ContentScript", "Disabled for this site");
        });

        assert_eq!(buffer.entries()[0].tag, "ContentScript");
    }

    #[test]
    fn test_ring_bounded_under_many_events() {
        let buffer = Arc::new(LogBuffer::new());
        let subscriber =
            tracing_subscriber::registry().with(RingBufferLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            for i in 0..40 {
                info!("event {}", i);
            }
        });

        let entries = buffer.entries();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[0].message, "event 15");
        assert_eq!(entries[24].message, "event 39");
    }
}
