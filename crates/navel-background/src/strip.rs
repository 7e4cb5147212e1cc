//! In-memory tab strip.

use navel_protocols::{MessageSender, TabId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BackgroundError;
use crate::host::{CreateProperties, TabHost};

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;

/// One tab in a [`MemoryTabStrip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub active: bool,
}

struct StripState {
    tabs: Vec<Tab>,
    next_id: u32,
}

impl StripState {
    fn position(&self, id: TabId) -> Result<usize, BackgroundError> {
        self.tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or(BackgroundError::NoSuchTab(id))
    }

    fn insert(&mut self, at: usize, url: String, active: bool) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        if active {
            for tab in &mut self.tabs {
                tab.active = false;
            }
        }
        let at = at.min(self.tabs.len());
        self.tabs.insert(at, Tab { id, url, active });
        id
    }
}

/// A single browser window's tab strip, held in memory.
pub struct MemoryTabStrip {
    state: Mutex<StripState>,
}

impl Default for MemoryTabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTabStrip {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StripState {
                tabs: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append a tab and make it active.
    pub fn open(&self, url: impl Into<String>) -> TabId {
        let mut state = self.state.lock();
        let end = state.tabs.len();
        state.insert(end, url.into(), true)
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.state.lock().tabs.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().tabs.is_empty()
    }

    pub fn active(&self) -> Option<TabId> {
        self.state
            .lock()
            .tabs
            .iter()
            .find(|tab| tab.active)
            .map(|tab| tab.id)
    }

    /// Make `id` the only active tab.
    pub fn activate(&self, id: TabId) -> Result<(), BackgroundError> {
        let mut state = self.state.lock();
        state.position(id)?;
        for tab in &mut state.tabs {
            tab.active = tab.id == id;
        }
        Ok(())
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.state.lock().position(id).ok()
    }

    /// Identity of `id` as a message sender.
    pub fn sender_for(&self, id: TabId) -> MessageSender {
        match self.index_of(id) {
            Some(index) => MessageSender::tab(id, index as i64),
            None => MessageSender::detached(),
        }
    }
}

impl TabHost for MemoryTabStrip {
    fn create_tab(&self, properties: CreateProperties) -> Result<TabId, BackgroundError> {
        let mut state = self.state.lock();
        let at = match properties.index {
            Some(index) if index >= 0 => index as usize,
            _ => state.tabs.len(),
        };
        let id = state.insert(at, properties.url, properties.active);
        debug!(%id, at, "Created tab");
        Ok(id)
    }

    fn duplicate_tab(&self, id: TabId) -> Result<TabId, BackgroundError> {
        let mut state = self.state.lock();
        let position = state.position(id)?;
        let url = state.tabs[position].url.clone();
        let copy = state.insert(position + 1, url, true);
        debug!(original = %id, %copy, "Duplicated tab");
        Ok(copy)
    }

    fn move_tab(&self, id: TabId, index: i64) -> Result<(), BackgroundError> {
        let mut state = self.state.lock();
        let from = state.position(id)?;
        let tab = state.tabs.remove(from);
        let to = if index < 0 {
            state.tabs.len()
        } else {
            (index as usize).min(state.tabs.len())
        };
        state.tabs.insert(to, tab);
        debug!(%id, from, to, "Moved tab");
        Ok(())
    }
}
