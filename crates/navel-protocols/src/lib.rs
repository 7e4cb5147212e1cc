//! # Navel Protocols
//!
//! Definitions shared by the page-resident component and the privileged
//! tab executor. Contains only message types and the boundary trait.
//!
//! ## Wire format
//!
//! Messages cross the boundary as JSON objects discriminated by `kind`:
//!
//! ```text
//! {"kind":"openInNewTab","data":{"href":"https://example.com/"}}
//! {"kind":"duplicateTab"}
//! {"kind":"moveTab","data":{"direction":"left"}}
//! ```

pub mod command;
pub mod error;
pub mod port;
pub mod sender;

pub use command::{BackgroundCommand, BackgroundCommandKind, MoveDirection};
pub use error::ProtocolError;
pub use port::{channel, BackgroundPort, ChannelPort, Envelope, EnvelopeReceiver};
pub use sender::{MessageSender, TabId, TabInfo};
