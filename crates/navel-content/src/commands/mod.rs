//! Page commands bound to keyboard shortcuts.
//!
//! Every command implements [`Command`]. Commands are created per
//! invocation by a [`CommandFactory`] and run on their own task; the
//! dispatcher hands each one a fresh [`CancellationToken`] and cancels it
//! when the next command starts.

mod dump_logs;
mod factory;
mod highlight_links;
mod history;
mod scroll;
mod tabs;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ContentError;

pub use dump_logs::{DumpLogsCommand, LogSink};
pub use factory::{CommandContext, CommandFactory};
pub use highlight_links::HighlightLinksCommand;
pub use history::HistoryCommand;
pub use scroll::ScrollCommand;
pub use tabs::{DuplicateTabCommand, MoveTabCommand};

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Every command Navel can run in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    HighlightLinks,
    DumpLogs,
    DuplicateTab,
    GoBack,
    GoForward,
    ScrollDown,
    ScrollUp,
    MoveTabLeft,
    MoveTabRight,
}

impl CommandKind {
    pub const ALL: [CommandKind; 9] = [
        CommandKind::HighlightLinks,
        CommandKind::DumpLogs,
        CommandKind::DuplicateTab,
        CommandKind::GoBack,
        CommandKind::GoForward,
        CommandKind::ScrollDown,
        CommandKind::ScrollUp,
        CommandKind::MoveTabLeft,
        CommandKind::MoveTabRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::HighlightLinks => "highlightLinks",
            CommandKind::DumpLogs => "dumpLogs",
            CommandKind::DuplicateTab => "duplicateTab",
            CommandKind::GoBack => "goBack",
            CommandKind::GoForward => "goForward",
            CommandKind::ScrollDown => "scrollDown",
            CommandKind::ScrollUp => "scrollUp",
            CommandKind::MoveTabLeft => "moveTabLeft",
            CommandKind::MoveTabRight => "moveTabRight",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

/// A page action.
#[async_trait]
pub trait Command: Send + Sync {
    fn kind(&self) -> CommandKind;

    /// Run the command. Long-running commands must stop promptly once
    /// `token` is cancelled.
    async fn execute(&self, token: Option<CancellationToken>) -> Result<(), ContentError>;
}
