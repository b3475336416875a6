// Persistence port for whole-sequence record collections.
//
// A collection is read in full on every load and rewritten in full on every
// save. Nothing is cached between calls, so two interleaved load/save cycles
// against the same collection can lose an update (last writer wins). Stores
// that need read-modify-write serialize it themselves.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to read collection {collection}: {reason}")]
    StorageRead { collection: String, reason: String },

    #[error("failed to write collection {collection}: {reason}")]
    StorageWrite { collection: String, reason: String },

    #[error("malformed collection {collection}: {reason}")]
    Decode { collection: String, reason: String },
}

#[async_trait]
pub trait Collection<T: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, CollectionError>;
    async fn save_all(&self, items: &[T]) -> Result<(), CollectionError>;
}

pub mod in_memory;
pub mod json_file;
