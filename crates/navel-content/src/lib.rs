//! # Navel Content
//!
//! The page-resident half of Navel: a keyboard listener that maps Ctrl
//! chords to commands, the link-hint subsystem behind the highlight
//! command, and the page abstraction they both work against.
//!
//! ## Link hints
//!
//! ```text
//! scan ──> allocate labels ──> render markers ──> await keys ──> teardown ──> activate
//! ```
//!
//! See [`highlight::HighlightSession`] for the session lifecycle.

pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod highlight;
pub mod keymap;
pub mod page;

pub use commands::{Command, CommandContext, CommandFactory, CommandKind, LogSink};
pub use dispatcher::ContentScript;
pub use error::ContentError;
pub use keymap::{KeyMap, KeyMapping};
pub use page::{MemoryPage, Page, PageFixture};
