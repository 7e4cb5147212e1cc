//! Discovery of interactive elements currently on screen.

use tracing::debug;

use crate::page::{ElementId, ElementSnapshot, Page, Rect};

/// Tags that are interactive on their own.
const CLICKABLE_TAGS: &[&str] = &["a", "button", "input", "textarea", "select", "link"];

/// ARIA roles that mark an element as interactive.
const CLICKABLE_ROLES: &[&str] = &["button", "link", "tab"];

/// Attributes that, when set, rule an element out.
const DISABLING_ATTRIBUTES: &[&str] = &["disabled", "aria-hidden", "aria-disabled"];

/// A visible interactive element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickableElementEntry {
    pub element: ElementId,
    /// Viewport-relative, as observed during the scan.
    pub bounding_rect: Rect,
}

/// Whether the element is interactive by tag, handler, editability or role.
pub fn is_candidate(element: &ElementSnapshot) -> bool {
    if CLICKABLE_TAGS.contains(&element.tag.as_str()) {
        return true;
    }
    if element.has_attribute("onclick") {
        return true;
    }
    if element
        .attribute("contenteditable")
        .is_some_and(|value| !value.eq_ignore_ascii_case("false"))
    {
        return true;
    }
    element
        .attribute("role")
        .is_some_and(|role| CLICKABLE_ROLES.contains(&role.to_ascii_lowercase().as_str()))
}

/// Whether the element is hidden or disabled.
pub fn is_excluded(element: &ElementSnapshot) -> bool {
    if element.tag == "input"
        && element
            .attribute("type")
            .is_some_and(|kind| kind.eq_ignore_ascii_case("hidden"))
    {
        return true;
    }
    DISABLING_ATTRIBUTES
        .iter()
        .any(|name| element.is_boolean_attribute_set(name))
}

/// Find interactive elements intersecting the viewport, in document order.
///
/// Geometry is observed once; the result does not track later layout
/// changes.
pub async fn scan(page: &dyn Page) -> Vec<ClickableElementEntry> {
    let candidates: Vec<ElementId> = page
        .elements()
        .iter()
        .filter(|element| is_candidate(element) && !is_excluded(element))
        .map(|element| element.id)
        .collect();

    if candidates.is_empty() {
        debug!("No interactive elements on page");
        return Vec::new();
    }

    let mut entries: Vec<ClickableElementEntry> = page
        .observe_intersections(&candidates)
        .await
        .into_iter()
        .filter(|entry| entry.is_intersecting)
        .map(|entry| ClickableElementEntry {
            element: entry.element,
            bounding_rect: entry.bounding_rect,
        })
        .collect();
    entries.sort_by_key(|entry| entry.element);

    debug!(
        candidates = candidates.len(),
        visible = entries.len(),
        "Scanned page for clickable elements"
    );
    entries
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
