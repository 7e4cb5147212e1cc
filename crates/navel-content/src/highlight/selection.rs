//! Keystroke-driven label selection, independent of any page.

use std::collections::HashSet;

use crate::highlight::labels::is_label_char;
use crate::page::KeyEvent;

/// A key the selection reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Escape,
    Backspace,
    /// A label character, lowercased.
    Char(char),
}

/// Map a raw key event to a [`SelectionKey`].
///
/// Chords with Ctrl or Meta belong to the page (or to other commands) and
/// are never claimed. Shift is reported separately by the event.
pub fn classify_key(event: &KeyEvent) -> Option<SelectionKey> {
    if event.ctrl || event.meta {
        return None;
    }

    let key = event.key.to_lowercase();
    match key.as_str() {
        "escape" => Some(SelectionKey::Escape),
        "backspace" => Some(SelectionKey::Backspace),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if is_label_char(c) => Some(SelectionKey::Char(c)),
                _ => None,
            }
        }
    }
}

/// Result of feeding one key to a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The typed prefix may have changed; keep waiting.
    Continue,
    /// The prefix now equals a label.
    Select { label: String, open_in_new_tab: bool },
    /// The user backed out.
    Cancel,
}

/// The typed prefix and the labels it is matched against.
#[derive(Debug, Default)]
pub struct Selection {
    labels: HashSet<String>,
    prefix: String,
}

impl Selection {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            prefix: String::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Advance with `key`. `shift` is whether Shift was held.
    pub fn apply(&mut self, key: SelectionKey, shift: bool) -> Step {
        match key {
            SelectionKey::Escape => Step::Cancel,
            SelectionKey::Backspace => {
                self.prefix.pop();
                Step::Continue
            }
            SelectionKey::Char(c) => {
                self.prefix.push(c);
                if self.labels.contains(&self.prefix) {
                    Step::Select {
                        label: self.prefix.clone(),
                        open_in_new_tab: shift,
                    }
                } else {
                    Step::Continue
                }
            }
        }
    }

    /// Forget the typed prefix.
    pub fn clear(&mut self) {
        self.prefix.clear();
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
