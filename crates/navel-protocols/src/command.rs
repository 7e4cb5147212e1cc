//! Commands sent from the page context to the privileged executor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;

/// Direction for a tab move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Offset applied to the tab index.
    pub fn offset(self) -> i64 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

/// A request for the privileged executor.
///
/// Serialized with the discriminant in `kind` and the payload, when there
/// is one, in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum BackgroundCommand {
    /// Open a URL in a new tab placed right after the sender's tab.
    OpenInNewTab { href: String },
    /// Duplicate the sender's tab.
    DuplicateTab,
    /// Move the sender's tab one position left or right.
    MoveTab { direction: MoveDirection },
}

impl BackgroundCommand {
    pub fn open_in_new_tab(href: impl Into<String>) -> Self {
        BackgroundCommand::OpenInNewTab { href: href.into() }
    }

    pub fn move_tab(direction: MoveDirection) -> Self {
        BackgroundCommand::MoveTab { direction }
    }

    /// The discriminant of this command.
    pub fn kind(&self) -> BackgroundCommandKind {
        match self {
            BackgroundCommand::OpenInNewTab { .. } => BackgroundCommandKind::OpenInNewTab,
            BackgroundCommand::DuplicateTab => BackgroundCommandKind::DuplicateTab,
            BackgroundCommand::MoveTab { .. } => BackgroundCommandKind::MoveTab,
        }
    }
}

/// The set of `kind` values the executor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundCommandKind {
    OpenInNewTab,
    DuplicateTab,
    MoveTab,
}

impl BackgroundCommandKind {
    pub const ALL: [BackgroundCommandKind; 3] = [
        BackgroundCommandKind::OpenInNewTab,
        BackgroundCommandKind::DuplicateTab,
        BackgroundCommandKind::MoveTab,
    ];

    /// Wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundCommandKind::OpenInNewTab => "openInNewTab",
            BackgroundCommandKind::DuplicateTab => "duplicateTab",
            BackgroundCommandKind::MoveTab => "moveTab",
        }
    }
}

impl fmt::Display for BackgroundCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundCommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
