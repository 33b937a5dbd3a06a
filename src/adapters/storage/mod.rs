//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One `<key>.json` file per key under a data directory
//! - **InMemoryKeyValueStore** - Values held in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! let store = FileKeyValueStore::new("./data");
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_store;
mod in_memory_store;

pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;

use crate::ports::StorageError;

/// Keys double as file names, so only a safe alphabet is accepted.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_keys() {
        assert!(validate_key("theme-storage").is_ok());
        assert!(validate_key("user").is_ok());
        assert!(validate_key("priorities").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(matches!(validate_key(""), Err(StorageError::InvalidKey(_))));
        assert!(matches!(validate_key("../user"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(validate_key("a/b"), Err(StorageError::InvalidKey(_))));
    }
}
