// In memory implementation of the Collection port.
//
// Purpose
// - Support store and handler tests and local development without touching disk.
//
// Responsibilities
// - Hold the collection as a vector behind a lock.
// - Simulate an unavailable backend (offline) or a read-only one.
// - Optionally delay loads so interleaved read-modify-write cycles can be reproduced.

use crate::shared::infrastructure::collection::{Collection, CollectionError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryCollection<T> {
    name: String,
    items: RwLock<Vec<T>>,
    offline: bool,
    read_only: bool,
    delay_load_ms: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> InMemoryCollection<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_items(name, Vec::new())
    }

    pub fn with_items(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            name: name.into(),
            items: RwLock::new(items),
            offline: false,
            read_only: false,
            delay_load_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn toggle_read_only(&mut self) {
        self.read_only = !self.read_only;
    }

    /// Delay applied after the snapshot is taken, before `load_all` returns.
    pub fn set_delay_load_ms(&self, ms: u64) {
        self.delay_load_ms.store(ms, Ordering::Relaxed);
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.items.read().await.clone()
    }
}

#[async_trait::async_trait]
impl<T> Collection<T> for InMemoryCollection<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load_all(&self) -> Result<Vec<T>, CollectionError> {
        if self.offline {
            return Err(CollectionError::StorageRead {
                collection: self.name.clone(),
                reason: "collection offline".into(),
            });
        }
        let items = self.items.read().await.clone();
        let delay = self.delay_load_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(items)
    }

    async fn save_all(&self, items: &[T]) -> Result<(), CollectionError> {
        if self.offline || self.read_only {
            return Err(CollectionError::StorageWrite {
                collection: self.name.clone(),
                reason: "collection not writable".into(),
            });
        }
        *self.items.write().await = items.to_vec();
        Ok(())
    }
}
