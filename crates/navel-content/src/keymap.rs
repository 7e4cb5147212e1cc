//! Shortcut table.
//!
//! Every shortcut is a Ctrl chord; the table is keyed by the browser's
//! `key` value for the non-modifier key.

use std::collections::HashMap;

use crate::commands::CommandKind;

/// The command bound to a key, and whether Shift must also be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub command: CommandKind,
    pub requires_shift: bool,
}

impl KeyMapping {
    pub fn ctrl(command: CommandKind) -> Self {
        Self {
            command,
            requires_shift: false,
        }
    }

    pub fn ctrl_shift(command: CommandKind) -> Self {
        Self {
            command,
            requires_shift: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    mappings: HashMap<String, KeyMapping>,
}

impl KeyMap {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn bind(mut self, key: impl Into<String>, mapping: KeyMapping) -> Self {
        self.mappings.insert(key.into(), mapping);
        self
    }

    pub fn get(&self, key: &str) -> Option<KeyMapping> {
        self.mappings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Bindings sorted by key.
    pub fn bindings(&self) -> Vec<(&str, KeyMapping)> {
        let mut bindings: Vec<_> = self
            .mappings
            .iter()
            .map(|(key, mapping)| (key.as_str(), *mapping))
            .collect();
        bindings.sort_by_key(|(key, _)| *key);
        bindings
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::empty()
            .bind("l", KeyMapping::ctrl(CommandKind::HighlightLinks))
            .bind("p", KeyMapping::ctrl(CommandKind::DumpLogs))
            .bind("d", KeyMapping::ctrl(CommandKind::DuplicateTab))
            .bind("b", KeyMapping::ctrl(CommandKind::GoBack))
            .bind("f", KeyMapping::ctrl(CommandKind::GoForward))
            .bind("j", KeyMapping::ctrl(CommandKind::ScrollDown))
            .bind("k", KeyMapping::ctrl(CommandKind::ScrollUp))
            .bind("ArrowLeft", KeyMapping::ctrl_shift(CommandKind::MoveTabLeft))
            .bind("ArrowRight", KeyMapping::ctrl_shift(CommandKind::MoveTabRight))
    }
}
