//! One handler per boundary command.

use std::sync::Arc;

use navel_protocols::{BackgroundCommand, BackgroundCommandKind, MessageSender};
use tracing::{debug, info, warn};

use crate::host::{CreateProperties, TabHost};

/// Executes one kind of boundary command against the tab host.
pub trait CommandHandler: Send + Sync {
    fn kind(&self) -> BackgroundCommandKind;

    fn execute(&self, command: &BackgroundCommand, sender: &MessageSender);
}

/// Opens a URL in a new active tab right after the sender's tab.
pub struct OpenInNewTabHandler {
    host: Arc<dyn TabHost>,
}

impl OpenInNewTabHandler {
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        Self { host }
    }
}

impl CommandHandler for OpenInNewTabHandler {
    fn kind(&self) -> BackgroundCommandKind {
        BackgroundCommandKind::OpenInNewTab
    }

    fn execute(&self, command: &BackgroundCommand, sender: &MessageSender) {
        let BackgroundCommand::OpenInNewTab { href } = command else {
            return;
        };

        let properties = CreateProperties {
            url: href.clone(),
            active: true,
            index: sender.tab.map(|tab| tab.index + 1),
        };
        match self.host.create_tab(properties) {
            Ok(id) => info!(%id, href = %href, "Opened link in new tab"),
            Err(e) => warn!(error = %e, href = %href, "Failed to open new tab"),
        }
    }
}

/// Duplicates the sender's tab.
pub struct DuplicateTabHandler {
    host: Arc<dyn TabHost>,
}

impl DuplicateTabHandler {
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        Self { host }
    }
}

impl CommandHandler for DuplicateTabHandler {
    fn kind(&self) -> BackgroundCommandKind {
        BackgroundCommandKind::DuplicateTab
    }

    fn execute(&self, _command: &BackgroundCommand, sender: &MessageSender) {
        let Some(id) = sender.tab_id() else {
            debug!("Duplicate requested by a sender without a tab");
            return;
        };

        match self.host.duplicate_tab(id) {
            Ok(copy) => info!(original = %id, %copy, "Duplicated tab"),
            Err(e) => warn!(error = %e, "Failed to duplicate tab"),
        }
    }
}

/// Moves the sender's tab one slot left or right.
///
/// Moving the first tab left targets index `-1`, which the host treats as
/// the end of the strip.
pub struct MoveTabHandler {
    host: Arc<dyn TabHost>,
}

impl MoveTabHandler {
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        Self { host }
    }
}

impl CommandHandler for MoveTabHandler {
    fn kind(&self) -> BackgroundCommandKind {
        BackgroundCommandKind::MoveTab
    }

    fn execute(&self, command: &BackgroundCommand, sender: &MessageSender) {
        let BackgroundCommand::MoveTab { direction } = command else {
            return;
        };
        let Some(tab) = sender.tab else {
            debug!("Move requested by a sender without a tab");
            return;
        };
        let Some(id) = tab.id else {
            debug!("Move requested by a tab without an id");
            return;
        };

        let index = tab.index + direction.offset();
        if let Err(e) = self.host.move_tab(id, index) {
            warn!(error = %e, "Failed to move tab");
        }
    }
}

/// The standard handler set.
pub fn default_handlers(host: Arc<dyn TabHost>) -> Vec<Box<dyn CommandHandler>> {
    vec![
        Box::new(OpenInNewTabHandler::new(Arc::clone(&host))),
        Box::new(DuplicateTabHandler::new(Arc::clone(&host))),
        Box::new(MoveTabHandler::new(host)),
    ]
}
