//! Priority list persistence.

use std::sync::Arc;

use crate::domain::decision::PriorityList;
use crate::domain::preferences::PRIORITIES_STORAGE_KEY;
use crate::ports::{load_json, save_json, KeyValueStore, StorageError};

/// Loads the stored priority list, or a fresh one.
pub struct LoadPrioritiesHandler {
    store: Arc<dyn KeyValueStore>,
}

impl LoadPrioritiesHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> PriorityList {
        match load_json::<PriorityList>(self.store.as_ref(), PRIORITIES_STORAGE_KEY).await {
            Ok(Some(list)) => list,
            Ok(None) => PriorityList::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Stored priorities unreadable, starting fresh");
                PriorityList::new()
            }
        }
    }
}

/// Command to persist the priority list.
#[derive(Debug, Clone)]
pub struct SavePrioritiesCommand {
    pub priorities: PriorityList,
}

pub struct SavePrioritiesHandler {
    store: Arc<dyn KeyValueStore>,
}

impl SavePrioritiesHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SavePrioritiesCommand) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), PRIORITIES_STORAGE_KEY, &cmd.priorities).await?;
        tracing::debug!(rows = cmd.priorities.items().len(), "Priorities saved");
        Ok(())
    }
}
