//! The asynchronous, unacknowledged message channel into the privileged
//! executor.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

use crate::command::BackgroundCommand;
use crate::error::ProtocolError;
use crate::sender::MessageSender;

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;

/// One message as it arrives at the privileged side.
///
/// The payload stays untyped until the executor dispatches it, so that a
/// malformed or unknown `kind` is detected where the dispatch table lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub payload: Value,
    pub sender: MessageSender,
}

/// Receiving half owned by the privileged executor.
pub type EnvelopeReceiver = mpsc::UnboundedReceiver<Envelope>;

/// Fire-and-forget send from the page context.
pub trait BackgroundPort: Send + Sync {
    /// Queue a command. Returns once the message is enqueued; there is no
    /// reply.
    fn send(&self, command: &BackgroundCommand) -> Result<(), ProtocolError>;
}

/// [`BackgroundPort`] backed by an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelPort {
    tx: mpsc::UnboundedSender<Envelope>,
    sender: MessageSender,
}

/// Create a port for a page identified by `sender`, plus the receiver the
/// executor reads from.
pub fn channel(sender: MessageSender) -> (ChannelPort, EnvelopeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelPort { tx, sender }, rx)
}

impl ChannelPort {
    /// Another port on the same channel, sending as a different page.
    pub fn for_sender(&self, sender: MessageSender) -> Self {
        Self {
            tx: self.tx.clone(),
            sender,
        }
    }

    /// Identity attached to outgoing messages.
    pub fn sender(&self) -> MessageSender {
        self.sender
    }

    /// Send an arbitrary JSON payload.
    pub fn send_raw(&self, payload: Value) -> Result<(), ProtocolError> {
        self.tx
            .send(Envelope {
                payload,
                sender: self.sender,
            })
            .map_err(|_| ProtocolError::Disconnected)
    }
}

impl BackgroundPort for ChannelPort {
    fn send(&self, command: &BackgroundCommand) -> Result<(), ProtocolError> {
        let payload = serde_json::to_value(command)?;
        debug!(kind = %command.kind(), "Sending message to privileged executor");
        self.send_raw(payload)
    }
}
