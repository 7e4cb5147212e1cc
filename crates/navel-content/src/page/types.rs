//! Value types exchanged with a [`Page`](super::Page).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an element within one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    /// Check if this rectangle overlaps another with non-zero area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// The same rectangle shifted by `(-dx, -dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x - dx,
            y: self.y - dy,
            ..*self
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// The viewport as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Read-only view of one element, as enumerated from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes keyed by lowercase name.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ElementSnapshot {
    pub fn new(id: ElementId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into().to_lowercase(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_lowercase(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Boolean attribute semantics: present with an empty value or with the
    /// value `true` (any case).
    pub fn is_boolean_attribute_set(&self, name: &str) -> bool {
        self.attribute(name)
            .map(|value| value.is_empty() || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn is_anchor(&self) -> bool {
        self.tag == "a"
    }
}

/// Result of observing one element's viewport intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Bounding rectangle relative to the viewport at observation time.
    pub bounding_rect: Rect,
    pub is_intersecting: bool,
}

/// Identifier of an overlay marker inserted into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Color of one marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    /// Already typed.
    Muted,
}

impl Tone {
    pub fn css_color(self) -> &'static str {
        match self {
            Tone::Default => "black",
            Tone::Muted => "#AAAAAA",
        }
    }
}

/// One displayed label character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

/// A positioned label overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub class_name: String,
    pub top: f64,
    pub left: f64,
    pub glyphs: Vec<Glyph>,
}

impl Marker {
    /// The displayed text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }
}

/// Identifier of a registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A `keydown` event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// Key value as reported by the browser (`"a"`, `"A"`, `"Escape"`,
    /// `"ArrowLeft"`, ...).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Document-level events delivered to listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    KeyDown(KeyEvent),
    Click { target: Option<ElementId> },
    Scroll,
}

/// What a listener did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Leave the event alone.
    pub const PASS: EventResponse = EventResponse {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress the default action and hide the event from later listeners.
    pub const CONSUME: EventResponse = EventResponse {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Summary of delivering one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    /// Number of listeners that saw the event.
    pub delivered: usize,
}

/// Animation for programmatic scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}
