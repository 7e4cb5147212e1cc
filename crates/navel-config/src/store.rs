//! Key-value settings storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ConfigError;
use crate::options::{ExtensionOptions, DISABLED_SITE_REGEXES_STORAGE_KEY};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Asynchronous key-value store for user settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError>;

    /// Read the extension options.
    async fn load_options(&self) -> Result<ExtensionOptions, ConfigError> {
        let stored = self.get(DISABLED_SITE_REGEXES_STORAGE_KEY).await?;
        Ok(ExtensionOptions::from_stored(stored.as_ref()))
    }

    /// Persist the extension options.
    async fn save_options(&self, options: &ExtensionOptions) -> Result<(), ConfigError> {
        let value = serde_json::to_value(&options.disabled_site_regexes)?;
        self.set(DISABLED_SITE_REGEXES_STORAGE_KEY, value).await
    }
}

/// Settings kept in a single JSON object on disk.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, ConfigError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::InvalidValue {
                field: self.path.display().to_string(),
                message: "settings file must contain a JSON object".to_string(),
            }),
        }
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        let mut all = self.read_all().await?;
        Ok(all.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut all = self.read_all().await?;
        all.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(all))?;
        tokio::fs::write(&self.path, content).await?;

        debug!(key, path = %self.path.display(), "Saved setting");
        Ok(())
    }
}

/// In-process settings store.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given options.
    pub fn with_options(options: &ExtensionOptions) -> Self {
        let store = Self::new();
        store.values.lock().insert(
            DISABLED_SITE_REGEXES_STORAGE_KEY.to_string(),
            Value::from(options.disabled_site_regexes.clone()),
        );
        store
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}
