//! Tab-management surface available to the privileged executor.

use navel_protocols::TabId;
use serde::{Deserialize, Serialize};

use crate::error::BackgroundError;

/// Properties of a tab to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProperties {
    pub url: String,
    pub active: bool,
    /// Position in the tab strip; appended when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

/// Browser tab operations.
pub trait TabHost: Send + Sync {
    fn create_tab(&self, properties: CreateProperties) -> Result<TabId, BackgroundError>;

    /// Duplicate `id` into a new tab placed right after it.
    fn duplicate_tab(&self, id: TabId) -> Result<TabId, BackgroundError>;

    /// Move `id` to `index`. `-1` moves the tab to the end of the strip.
    fn move_tab(&self, id: TabId, index: i64) -> Result<(), BackgroundError>;
}
