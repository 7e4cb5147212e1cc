//! Turning a selected label into an action.

use std::sync::Arc;

use navel_protocols::{BackgroundCommand, BackgroundPort};
use tracing::{info, warn};

use crate::page::{ElementId, Page};

/// What the resolver did with a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Asked the privileged executor to open `href` in a new tab.
    OpenedInNewTab { href: String },
    /// Focused and clicked the element in place.
    Clicked,
}

/// Activates selected elements, in place or in a new tab.
pub struct ActionResolver {
    page: Arc<dyn Page>,
    port: Arc<dyn BackgroundPort>,
}

impl ActionResolver {
    pub fn new(page: Arc<dyn Page>, port: Arc<dyn BackgroundPort>) -> Self {
        Self { page, port }
    }

    /// Activate `target`. With `open_in_new_tab`, hyperlinks with a usable
    /// URL open in a new tab; everything else is clicked.
    ///
    /// Sending is fire-and-forget: a failed send is logged and the
    /// activation still reports what was attempted.
    pub fn resolve(&self, target: ElementId, open_in_new_tab: bool) -> Activation {
        if open_in_new_tab {
            if let Some(href) = self.page.resolved_href(target).filter(|href| !href.is_empty()) {
                info!(%target, href = %href, "Activating annotation in new tab");
                if let Err(e) = self.port.send(&BackgroundCommand::open_in_new_tab(href.clone())) {
                    warn!(error = %e, "Failed to request new tab");
                }
                return Activation::OpenedInNewTab { href };
            }
        }

        info!(%target, "Activating annotation by click");
        self.page.focus(target);
        self.page.click(target);
        Activation::Clicked
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
