//! Link hints: label every visible interactive element and activate the
//! one whose label the user types.

pub mod labels;
pub mod overlay;
pub mod resolver;
pub mod scanner;
pub mod selection;
pub mod session;

pub use labels::{allocate, LABEL_ALPHABET, MAX_LABELS};
pub use overlay::{MarkerHandle, OverlayRenderer, MARKER_CLASS};
pub use resolver::{ActionResolver, Activation};
pub use scanner::{scan, ClickableElementEntry};
pub use selection::{classify_key, Selection, SelectionKey, Step};
pub use session::{AbandonReason, HighlightSession, SessionOutcome, SessionPhase};
