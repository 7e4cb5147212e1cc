//! In-process page implementation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::trace;
use url::Url;

use super::types::*;
use super::{EventListener, Page};

struct ElementNode {
    snapshot: ElementSnapshot,
    /// Document coordinates.
    rect: Rect,
}

struct PageState {
    history: Vec<String>,
    history_index: usize,
    viewport: Viewport,
    scroll_x: f64,
    scroll_y: f64,
    elements: Vec<ElementNode>,
    markers: BTreeMap<MarkerId, Marker>,
    next_marker: u64,
    markers_created: u64,
    listeners: Vec<(ListenerId, Arc<dyn EventListener>)>,
    next_listener: u64,
    focused: Option<ElementId>,
    activations: Vec<ElementId>,
}

/// A page held entirely in memory.
///
/// Listeners are consulted newest first, so a listener installed later
/// (for example an active hint session) can hide an event from listeners
/// installed before it.
pub struct MemoryPage {
    state: Mutex<PageState>,
    geometry_delay: Option<Duration>,
}

impl MemoryPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(PageState {
                history: vec![url.into()],
                history_index: 0,
                viewport: Viewport::default(),
                scroll_x: 0.0,
                scroll_y: 0.0,
                elements: Vec::new(),
                markers: BTreeMap::new(),
                next_marker: 1,
                markers_created: 0,
                listeners: Vec::new(),
                next_listener: 1,
                focused: None,
                activations: Vec::new(),
            }),
            geometry_delay: None,
        }
    }

    pub fn with_viewport(self, viewport: Viewport) -> Self {
        self.state.lock().viewport = viewport;
        self
    }

    /// Delay geometry observation, as a busy layout would.
    pub fn with_geometry_delay(mut self, delay: Duration) -> Self {
        self.geometry_delay = Some(delay);
        self
    }

    /// Append an element at document position `rect`.
    pub fn add_element(&self, tag: &str, attributes: &[(&str, &str)], rect: Rect) -> ElementId {
        let mut state = self.state.lock();
        let id = ElementId(state.elements.len());
        let snapshot = attributes
            .iter()
            .fold(ElementSnapshot::new(id, tag), |s, (name, value)| {
                s.with_attribute(name, *value)
            });
        state.elements.push(ElementNode { snapshot, rect });
        id
    }

    /// Deliver an event to registered listeners.
    pub fn dispatch(&self, event: PageEvent) -> DispatchOutcome {
        let listeners: Vec<Arc<dyn EventListener>> = {
            let state = self.state.lock();
            state
                .listeners
                .iter()
                .rev()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        let mut outcome = DispatchOutcome::default();
        for listener in listeners {
            let response = listener.handle_event(&event);
            outcome.delivered += 1;
            outcome.default_prevented |= response.prevent_default;
            if response.stop_propagation {
                break;
            }
        }

        trace!(?event, ?outcome, "Dispatched page event");
        outcome
    }

    pub fn key_down(&self, event: KeyEvent) -> DispatchOutcome {
        self.dispatch(PageEvent::KeyDown(event))
    }

    /// A pointer click somewhere on the page, outside Navel.
    pub fn user_click(&self, target: Option<ElementId>) -> DispatchOutcome {
        self.dispatch(PageEvent::Click { target })
    }

    /// A user scroll (wheel, touch pad).
    pub fn user_scroll(&self, dy: f64) -> DispatchOutcome {
        self.apply_scroll(0.0, dy);
        self.dispatch(PageEvent::Scroll)
    }

    /// Markers currently attached, in insertion order.
    pub fn markers(&self) -> Vec<Marker> {
        self.state.lock().markers.values().cloned().collect()
    }

    pub fn marker_count(&self) -> usize {
        self.state.lock().markers.len()
    }

    /// Total markers ever inserted, including removed ones.
    pub fn markers_created(&self) -> u64 {
        self.state.lock().markers_created
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.state.lock().focused
    }

    /// Elements activated through [`Page::click`], in order.
    pub fn activations(&self) -> Vec<ElementId> {
        self.state.lock().activations.clone()
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        let state = self.state.lock();
        (state.scroll_x, state.scroll_y)
    }

    /// Session history and the index of the current entry.
    pub fn history(&self) -> (Vec<String>, usize) {
        let state = self.state.lock();
        (state.history.clone(), state.history_index)
    }

    fn apply_scroll(&self, dx: f64, dy: f64) {
        let mut state = self.state.lock();
        state.scroll_x = (state.scroll_x + dx).max(0.0);
        state.scroll_y = (state.scroll_y + dy).max(0.0);
    }

    fn navigate(&self, url: String) {
        let mut state = self.state.lock();
        let next = state.history_index + 1;
        state.history.truncate(next);
        state.history.push(url);
        state.history_index = next;
        state.scroll_x = 0.0;
        state.scroll_y = 0.0;
    }

    fn resolve_href(location: &str, snapshot: &ElementSnapshot) -> Option<String> {
        if !snapshot.is_anchor() {
            return None;
        }
        let href = snapshot.attribute("href")?;
        let base = Url::parse(location).ok()?;
        base.join(href.trim()).ok().map(String::from)
    }
}

#[async_trait]
impl Page for MemoryPage {
    fn location(&self) -> String {
        let state = self.state.lock();
        state.history[state.history_index].clone()
    }

    fn elements(&self) -> Vec<ElementSnapshot> {
        self.state
            .lock()
            .elements
            .iter()
            .map(|node| node.snapshot.clone())
            .collect()
    }

    fn element(&self, id: ElementId) -> Option<ElementSnapshot> {
        self.state
            .lock()
            .elements
            .get(id.0)
            .map(|node| node.snapshot.clone())
    }

    async fn observe_intersections(&self, targets: &[ElementId]) -> Vec<IntersectionEntry> {
        if let Some(delay) = self.geometry_delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock();
        let viewport = state.viewport.rect();
        targets
            .iter()
            .filter_map(|id| state.elements.get(id.0))
            .map(|node| {
                let bounding_rect = node.rect.translated(state.scroll_x, state.scroll_y);
                IntersectionEntry {
                    element: node.snapshot.id,
                    bounding_rect,
                    is_intersecting: bounding_rect.intersects(&viewport),
                }
            })
            .collect()
    }

    fn resolved_href(&self, id: ElementId) -> Option<String> {
        let location = self.location();
        let snapshot = self.element(id)?;
        Self::resolve_href(&location, &snapshot)
    }

    fn focus(&self, id: ElementId) {
        let mut state = self.state.lock();
        if id.0 < state.elements.len() {
            state.focused = Some(id);
        }
    }

    fn click(&self, id: ElementId) {
        {
            let mut state = self.state.lock();
            if id.0 >= state.elements.len() {
                return;
            }
            state.activations.push(id);
        }

        let outcome = self.dispatch(PageEvent::Click { target: Some(id) });
        if outcome.default_prevented {
            return;
        }
        if let Some(url) = self.resolved_href(id) {
            self.navigate(url);
        }
    }

    fn insert_marker(&self, marker: Marker) -> MarkerId {
        let mut state = self.state.lock();
        let id = MarkerId(state.next_marker);
        state.next_marker += 1;
        state.markers_created += 1;
        state.markers.insert(id, marker);
        id
    }

    fn set_marker_tones(&self, id: MarkerId, tones: &[Tone]) {
        if let Some(marker) = self.state.lock().markers.get_mut(&id) {
            for (glyph, tone) in marker.glyphs.iter_mut().zip(tones) {
                glyph.tone = *tone;
            }
        }
    }

    fn remove_marker(&self, id: MarkerId) {
        self.state.lock().markers.remove(&id);
    }

    fn add_listener(&self, listener: Arc<dyn EventListener>) -> ListenerId {
        let mut state = self.state.lock();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.state.lock().listeners.retain(|(lid, _)| *lid != id);
    }

    fn history_go(&self, delta: i64) {
        let mut state = self.state.lock();
        let target = state.history_index as i64 + delta;
        if target >= 0 && (target as usize) < state.history.len() {
            state.history_index = target as usize;
        }
    }

    fn scroll_by(&self, dx: f64, dy: f64, behavior: ScrollBehavior) {
        trace!(dx, dy, ?behavior, "Scrolling page");
        self.apply_scroll(dx, dy);
        self.dispatch(PageEvent::Scroll);
    }
}
