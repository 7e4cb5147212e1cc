//! Per-site options persisted in the settings store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key under which the disabled-site patterns are kept.
pub const DISABLED_SITE_REGEXES_STORAGE_KEY: &str = "disabledSiteRegexs";

/// User-editable extension options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionOptions {
    /// Regular expressions matched against the page URL. A match disables
    /// Navel on that page.
    #[serde(rename = "disabledSiteRegexs", default)]
    pub disabled_site_regexes: Vec<String>,
}

impl ExtensionOptions {
    /// Read options from a raw stored value. Anything other than an array
    /// reads as "no patterns"; non-string array items are skipped.
    pub fn from_stored(value: Option<&Value>) -> Self {
        let disabled_site_regexes = value
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            disabled_site_regexes,
        }
    }

    /// Parse the options editor text: one pattern per line, `\n` or `\r\n`
    /// separated, blank lines dropped.
    pub fn from_text(text: &str) -> Self {
        let disabled_site_regexes = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            disabled_site_regexes,
        }
    }

    /// Render the patterns for the options editor.
    pub fn to_text(&self) -> String {
        self.disabled_site_regexes.join("\n")
    }
}
