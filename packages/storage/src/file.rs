//! # File-backed key/value store
//!
//! [`FileStore`] keeps every entry in a single JSON object on disk, which lets
//! a session survive process restarts the way browser local storage survives
//! page reloads.
//!
//! ```text
//! ~/.freelink/
//! └── session.json     # {"authToken": "...", "user": "{...}"}
//! ```
//!
//! Writes go through a temporary file and a rename so a crash never leaves a
//! half-written file behind.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{KeyValueStore, StorageError, StorageResult};

const DEFAULT_FILE_NAME: &str = "session.json";

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `<dir>/session.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StorageResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(StorageError::Corrupt(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                type_name(&other)
            ))),
        }
    }

    /// Load for a read-modify-write; a corrupt file is replaced rather than blocking writes.
    ///
    /// The flag is set when the file on disk was discarded and must be rewritten.
    async fn load_for_write(&self) -> StorageResult<(Map<String, Value>, bool)> {
        match self.load().await {
            Ok(map) => Ok((map, false)),
            Err(StorageError::Io(e)) => Err(StorageError::Io(e)),
            Err(e) => {
                warn!("Discarding unreadable storage file {}: {}", self.path.display(), e);
                Ok((Map::new(), true))
            }
        }
    }

    async fn save(&self, map: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.load().await?;
        debug!("Read key {} from {}", key, self.path.display());
        Ok(map.get(key).and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, _) = self.load_for_write().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&map).await?;
        debug!("Wrote key {} to {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, discarded) = self.load_for_write().await?;
        if map.remove(key).is_none() && !discarded {
            return Ok(());
        }
        self.save(&map).await?;
        debug!("Removed key {} from {}", key, self.path.display());
        Ok(())
    }
}
