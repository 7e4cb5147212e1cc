//! # Navel Background
//!
//! The privileged half of Navel. Page components cannot touch the tab
//! strip; they send [`BackgroundCommand`](navel_protocols::BackgroundCommand)s
//! over a port, and the [`BackgroundRouter`] executes them against a
//! [`TabHost`].

mod error;
mod handlers;
mod host;
mod router;
mod strip;

pub use error::BackgroundError;
pub use handlers::{
    default_handlers, CommandHandler, DuplicateTabHandler, MoveTabHandler, OpenInNewTabHandler,
};
pub use host::{CreateProperties, TabHost};
pub use router::BackgroundRouter;
pub use strip::{MemoryTabStrip, Tab};
