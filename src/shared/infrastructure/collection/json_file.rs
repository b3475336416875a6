// JSON file implementation of the Collection port.
//
// The whole collection lives in one file holding a pretty-printed JSON array.
// Saves overwrite the file in place: a crash in the middle of a write can leave
// it truncated, and the next load then fails with a decode error.

use crate::shared::infrastructure::collection::{Collection, CollectionError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::PathBuf;

pub struct JsonFileCollection<T> {
    name: String,
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileCollection<T> {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Creates the backing file as an empty array when it does not exist yet.
    /// Returns `true` when a file was created.
    pub async fn ensure_exists(&self) -> Result<bool, CollectionError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;
        if exists {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }
        tokio::fs::write(&self.path, b"[]")
            .await
            .map_err(|e| self.write_error(e))?;
        tracing::info!(collection = %self.name, path = %self.path.display(), "created empty collection file");
        Ok(true)
    }

    fn read_error(&self, e: impl ToString) -> CollectionError {
        CollectionError::StorageRead {
            collection: self.name.clone(),
            reason: e.to_string(),
        }
    }

    fn write_error(&self, e: impl ToString) -> CollectionError {
        CollectionError::StorageWrite {
            collection: self.name.clone(),
            reason: e.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl<T> Collection<T> for JsonFileCollection<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load_all(&self) -> Result<Vec<T>, CollectionError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;
        serde_json::from_str(&raw).map_err(|e| CollectionError::Decode {
            collection: self.name.clone(),
            reason: e.to_string(),
        })
    }

    async fn save_all(&self, items: &[T]) -> Result<(), CollectionError> {
        let raw = serde_json::to_string_pretty(items).map_err(|e| self.write_error(e))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| self.write_error(e))?;
        tracing::debug!(collection = %self.name, records = items.len(), "collection saved");
        Ok(())
    }
}
