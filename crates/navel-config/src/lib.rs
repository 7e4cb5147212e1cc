//! # Navel Config
//!
//! Runtime configuration (TOML) and the persisted per-site settings that
//! decide whether Navel is active on a page.

mod error;
mod loader;
mod options;
mod schema;
mod site_filter;
mod store;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use options::{ExtensionOptions, DISABLED_SITE_REGEXES_STORAGE_KEY};
pub use schema::*;
pub use site_filter::SiteFilter;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
