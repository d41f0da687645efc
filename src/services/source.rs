//! Data-fetch collaborators that hand the serialized level mapping to the widget
//!
//! The host app writes its heatmap payload into a key/value store (a JSON
//! object of string values on disk). A source only fetches the raw string;
//! parsing is left to `crate::parsers`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::types::{HeatgridError, Result};

/// Key the host app stores the heatmap payload under
pub const DEFAULT_STORE_KEY: &str = "heatmap_data";

/// Synchronous source of the raw serialized payload
pub trait DataSource: Send + Sync {
    /// Source name for log messages
    fn name(&self) -> &str;

    /// Fetch the payload. `Ok(None)` means nothing has been stored yet.
    fn fetch(&self) -> Result<Option<String>>;
}

/// Reads one string entry out of a JSON key/value store file
pub struct StoreFileSource {
    path: PathBuf,
    key: String,
}

impl StoreFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self::with_key(path, DEFAULT_STORE_KEY)
    }

    pub fn with_key(path: PathBuf, key: impl Into<String>) -> Self {
        Self {
            path,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl DataSource for StoreFileSource {
    fn name(&self) -> &str {
        "store"
    }

    fn fetch(&self) -> Result<Option<String>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };

        let store: Value =
            serde_json::from_str(&content).map_err(|e| HeatgridError::Parse(e.to_string()))?;
        let Value::Object(mut entries) = store else {
            return Err(HeatgridError::Parse(format!(
                "store {} is not a JSON object",
                self.path.display()
            )));
        };

        match entries.remove(&self.key) {
            Some(Value::String(payload)) => Ok(Some(payload)),
            Some(other) => {
                log::warn!(
                    "[store] key '{}' holds a non-string value ({}); ignoring",
                    self.key,
                    other
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// Whole file content is the payload
pub struct RawFileSource {
    path: PathBuf,
}

impl RawFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataSource for RawFileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self) -> Result<Option<String>> {
        read_optional(&self.path)
    }
}

/// In-memory payload, used when the caller already holds the string
pub struct StaticSource(pub Option<String>);

impl DataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Read a file, treating "not found" as absent data
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HeatgridError::Io(e)),
    }
}
