//! Key/Value Store Port - local persistence of opaque JSON blobs.
//!
//! Stands in for browser local storage. Values are JSON strings with no
//! versioning; callers own their shapes.

use async_trait::async_trait;

/// Errors that can occur during storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize value for '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize value for '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing opaque values by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// `None` when nothing is stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and deserializes a JSON value.
pub async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError>
where
    T: serde::de::DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::DeserializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Serializes and writes a JSON value.
pub async fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: serde::Serialize + Sync,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::SerializationFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw).await
}
