// ABOUTME: Durable key/value storage backing the persisted session
// ABOUTME: File-backed store for the CLI and an in-memory store for tests and ephemeral runs

pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// String key/value store with the semantics of browser local storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key; deleting an absent key succeeds
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
