//! JSON description of a page, used to build a [`MemoryPage`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::memory::MemoryPage;
use super::types::{Rect, Viewport};

/// One element of a [`PageFixture`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementFixture {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Document coordinates.
    pub rect: Rect,
}

/// A page snapshot: URL, viewport and flat element list.
///
/// ```json
/// {
///   "url": "https://example.com/",
///   "viewport": {"width": 800, "height": 600},
///   "elements": [
///     {"tag": "a", "attributes": {"href": "/docs"}, "rect": {"x": 10, "y": 10, "width": 80, "height": 20}}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFixture {
    pub url: String,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub elements: Vec<ElementFixture>,
}

impl PageFixture {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_page(self) -> MemoryPage {
        let page = MemoryPage::new(self.url).with_viewport(self.viewport);
        for element in &self.elements {
            let attributes: Vec<(&str, &str)> = element
                .attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            page.add_element(&element.tag, &attributes, element.rect);
        }
        page
    }
}
