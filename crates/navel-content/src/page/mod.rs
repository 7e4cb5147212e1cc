//! The document surface Navel works against.
//!
//! [`Page`] covers exactly what the page-resident component needs from a
//! browsing context: flat element enumeration, one-shot geometry
//! observation, overlay markers, document-level listeners and a few
//! window operations. [`MemoryPage`] is a complete in-process
//! implementation used by tests and the simulator.

mod fixture;
mod memory;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

pub use fixture::{ElementFixture, PageFixture};
pub use memory::MemoryPage;
pub use types::*;

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;

/// Receives document-level events.
///
/// Called synchronously during dispatch; implementations must not block.
pub trait EventListener: Send + Sync {
    fn handle_event(&self, event: &PageEvent) -> EventResponse;
}

/// A browsing context as seen from page-resident code.
#[async_trait]
pub trait Page: Send + Sync {
    /// Current document URL.
    fn location(&self) -> String;

    /// Every element in document order.
    fn elements(&self) -> Vec<ElementSnapshot>;

    fn element(&self, id: ElementId) -> Option<ElementSnapshot>;

    /// Observe `targets` once and report each one's viewport intersection.
    /// Resolves exactly once; unknown ids are left out.
    async fn observe_intersections(&self, targets: &[ElementId]) -> Vec<IntersectionEntry>;

    /// Absolute URL of a hyperlink, resolved against the document URL.
    /// `None` for non-links and links without a usable `href`.
    fn resolved_href(&self, id: ElementId) -> Option<String>;

    fn focus(&self, id: ElementId);

    /// Synthesize a primary activation on the element.
    fn click(&self, id: ElementId);

    fn insert_marker(&self, marker: Marker) -> MarkerId;

    fn set_marker_tones(&self, id: MarkerId, tones: &[Tone]);

    fn remove_marker(&self, id: MarkerId);

    fn add_listener(&self, listener: Arc<dyn EventListener>) -> ListenerId;

    /// Removing an unknown or already removed listener is a no-op.
    fn remove_listener(&self, id: ListenerId);

    /// Move through session history (`-1` back, `1` forward).
    fn history_go(&self, delta: i64);

    fn scroll_by(&self, dx: f64, dy: f64, behavior: ScrollBehavior);
}

/// A registered listener, removed when this value is dropped.
pub struct Subscription {
    page: Arc<dyn Page>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn register(page: &Arc<dyn Page>, listener: Arc<dyn EventListener>) -> Self {
        let id = page.add_listener(listener);
        Self {
            page: Arc::clone(page),
            id: Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Remove the listener. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            self.page.remove_listener(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
