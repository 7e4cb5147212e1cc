//! Dispatch table for boundary messages.

use std::collections::HashMap;
use std::sync::Arc;

use navel_protocols::{BackgroundCommand, BackgroundCommandKind, Envelope, EnvelopeReceiver};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::BackgroundError;
use crate::handlers::{default_handlers, CommandHandler};
use crate::host::TabHost;

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;

/// Routes incoming messages to handlers by `kind`.
pub struct BackgroundRouter {
    handlers: HashMap<BackgroundCommandKind, Box<dyn CommandHandler>>,
}

impl BackgroundRouter {
    /// A router with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A router with the standard handlers bound to `host`.
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        default_handlers(host)
            .into_iter()
            .fold(Self::empty(), |router, handler| router.with_handler(handler))
    }

    pub fn with_handler(mut self, handler: Box<dyn CommandHandler>) -> Self {
        self.handlers.insert(handler.kind(), handler);
        self
    }

    /// Handle one message.
    pub fn dispatch(&self, envelope: Envelope) -> Result<(), BackgroundError> {
        let Envelope { payload, sender } = envelope;
        let kind_name = payload
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let handler = kind_name
            .parse::<BackgroundCommandKind>()
            .ok()
            .and_then(|kind| self.handlers.get(&kind))
            .ok_or_else(|| BackgroundError::UnknownCommand(kind_name.clone()))?;

        let command: BackgroundCommand =
            serde_json::from_value(payload).map_err(|source| BackgroundError::Malformed {
                kind: kind_name.clone(),
                source,
            })?;

        debug!(kind = %kind_name, tab = ?sender.tab_id(), "Dispatching boundary command");
        handler.execute(&command, &sender);
        Ok(())
    }

    /// Process messages until the channel closes or `shutdown` fires.
    ///
    /// Malformed messages are logged and skipped. An unknown `kind` stops
    /// the loop and is returned.
    pub async fn run(
        &self,
        mut rx: EnvelopeReceiver,
        shutdown: CancellationToken,
    ) -> Result<(), BackgroundError> {
        info!("Background executor started");
        loop {
            let envelope = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Background executor shutting down");
                    break;
                }
                envelope = rx.recv() => match envelope {
                    Some(envelope) => envelope,
                    None => {
                        debug!("All ports closed");
                        break;
                    }
                },
            };

            match self.dispatch(envelope) {
                Ok(()) => {}
                Err(e) if e.is_fatal() => {
                    error!(error = %e, "Stopping background executor");
                    return Err(e);
                }
                Err(e) => warn!(error = %e, "Dropping message"),
            }
        }
        Ok(())
    }
}
