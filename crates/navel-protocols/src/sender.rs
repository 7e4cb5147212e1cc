//! Identity of the page that sent a message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Browser tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// The sending tab, as seen by the privileged executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Tabs outside the normal tab strip (devtools, prerender) carry no id.
    pub id: Option<TabId>,
    /// Zero-based position in the window's tab strip.
    pub index: i64,
}

/// Metadata attached to every message crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageSender {
    /// Absent when the message did not originate from a tab.
    pub tab: Option<TabInfo>,
}

impl MessageSender {
    /// Sender for a page living in tab `id` at position `index`.
    pub fn tab(id: TabId, index: i64) -> Self {
        Self {
            tab: Some(TabInfo { id: Some(id), index }),
        }
    }

    /// Sender without any tab.
    pub fn detached() -> Self {
        Self { tab: None }
    }

    /// Tab id and index, when both are known.
    pub fn tab_id(&self) -> Option<TabId> {
        self.tab.and_then(|tab| tab.id)
    }
}
