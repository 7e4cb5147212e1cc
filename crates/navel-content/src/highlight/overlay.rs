//! Label markers drawn over hinted elements.

use std::sync::Arc;

use tracing::trace;

use crate::page::{Glyph, Marker, MarkerId, Page, Rect, Tone};

/// Class attached to every marker so page styles can be isolated from it.
pub const MARKER_CLASS: &str = "_navel-annotation";

/// A live marker. Destroying it consumes the handle.
#[derive(Debug)]
pub struct MarkerHandle {
    id: MarkerId,
    label: String,
}

impl MarkerHandle {
    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Creates, updates and removes markers on one page.
#[derive(Clone)]
pub struct OverlayRenderer {
    page: Arc<dyn Page>,
}

impl OverlayRenderer {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self { page }
    }

    /// Place a marker showing `label` at the top-left corner of `rect`.
    pub fn render(&self, rect: Rect, label: &str) -> MarkerHandle {
        let marker = Marker {
            class_name: MARKER_CLASS.to_string(),
            top: rect.top(),
            left: rect.left(),
            glyphs: label
                .chars()
                .map(|c| Glyph {
                    ch: c.to_ascii_uppercase(),
                    tone: Tone::Default,
                })
                .collect(),
        };
        let id = self.page.insert_marker(marker);
        trace!(label, ?id, "Rendered marker");
        MarkerHandle {
            id,
            label: label.to_string(),
        }
    }

    /// Mute the first `matched` glyphs and reset the rest.
    pub fn emphasize(&self, handle: &MarkerHandle, matched: usize) {
        let tones: Vec<Tone> = (0..handle.label.chars().count())
            .map(|i| if i < matched { Tone::Muted } else { Tone::Default })
            .collect();
        self.page.set_marker_tones(handle.id, &tones);
    }

    /// Re-emphasize against the typed `prefix`: muted up to the prefix
    /// length when the label starts with it, all default otherwise.
    pub fn emphasize_prefix(&self, handle: &MarkerHandle, prefix: &str) {
        let matched = if handle.label.starts_with(prefix) {
            prefix.chars().count()
        } else {
            0
        };
        self.emphasize(handle, matched);
    }

    pub fn destroy(&self, handle: MarkerHandle) {
        self.page.remove_marker(handle.id);
    }
}
