//! Flat-file JSON document store.
//!
//! The entire application state lives in one JSON document on disk. Reads
//! return the whole document; writes shallow-merge a patch of top-level keys
//! and rewrite the file in place. There is no locking and no versioning:
//! concurrent writers race and the last write wins at top-level-key
//! granularity. The frontend accepts this by always posting the complete
//! sub-collections it changed, which bounds the blast radius of a lost
//! update to that caller's own previous view.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::errors::AppError;

/// Handle to the on-disk document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file with an empty document if it does not exist.
    ///
    /// Startup-time bootstrap only; `read` never synthesizes a default.
    pub async fn ensure_exists(&self) -> io::Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        tracing::info!("Seeding empty document at {:?}", self.path);
        tokio::fs::write(&self.path, "{}").await
    }

    /// Read and parse the full document.
    ///
    /// A missing, unreadable, or unparsable file is a read error; no
    /// fallback document is produced.
    pub async fn read(&self) -> Result<Value, AppError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!("Error reading {:?}: {}", self.path, e);
            AppError::Read(e.to_string())
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!("Error parsing {:?}: {}", self.path, e);
            AppError::Read(e.to_string())
        })
    }

    /// Shallow-merge a patch into the document and rewrite the file.
    ///
    /// Every top-level key in the patch fully replaces the corresponding key
    /// in the stored document; keys absent from the patch are preserved.
    /// There is no recursive merge: a patch carrying `planets` replaces the
    /// entire planet collection, not just the planets it names. Any failure
    /// along the read-merge-write sequence fails the whole operation as a
    /// write error; partial writes are not rolled back or repaired.
    pub async fn write(&self, patch: Map<String, Value>) -> Result<(), AppError> {
        let current = match self.read().await {
            Ok(document) => document,
            Err(e) => {
                return Err(AppError::Write(e.to_string()));
            }
        };

        // A non-object document contributes nothing to the merge.
        let mut merged = current.as_object().cloned().unwrap_or_default();
        for (key, value) in patch {
            merged.insert(key, value);
        }

        let pretty = serde_json::to_string_pretty(&Value::Object(merged)).map_err(|e| {
            tracing::error!("Error serializing document: {}", e);
            AppError::Write(e.to_string())
        })?;

        tokio::fs::write(&self.path, pretty).await.map_err(|e| {
            tracing::error!("Error writing {:?}: {}", self.path, e);
            AppError::Write(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_with(document: &Value) -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, serde_json::to_string(document).unwrap()).unwrap();
        (dir, JsonStore::new(path))
    }

    fn patch(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_merge_is_shallow() {
        let (_dir, store) = store_with(&json!({
            "planets": { "Coruscant": { "x": 1, "y": 2, "faction": "REPUBLICANO" } },
            "routes": [ { "from": "A", "to": "B", "color": "white", "dashed": true } ]
        }));

        store
            .write(patch(json!({
                "planets": { "Geonosis": { "x": 5, "y": 6, "faction": "SEPARATISTA" } }
            })))
            .await
            .unwrap();

        let document = store.read().await.unwrap();
        // The planets key was fully replaced, not deep-merged
        assert!(document["planets"]["Coruscant"].is_null());
        assert_eq!(document["planets"]["Geonosis"]["faction"], "SEPARATISTA");
        // Keys absent from the patch are untouched
        assert_eq!(document["routes"][0]["from"], "A");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        let err = store.read().await.unwrap_err();
        assert_eq!(err.message(), "Error reading data");
    }

    #[tokio::test]
    async fn test_read_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::new(path).read().await.unwrap_err();
        assert_eq!(err.message(), "Error reading data");
    }

    #[tokio::test]
    async fn test_write_fails_when_read_half_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        let err = store.write(patch(json!({ "routes": [] }))).await.unwrap_err();
        assert_eq!(err.message(), "Error writing data");
    }

    #[tokio::test]
    async fn test_non_object_document_merges_like_empty() {
        let (_dir, store) = store_with(&json!(3));

        store
            .write(patch(json!({ "routes": [] })))
            .await
            .unwrap();

        let document = store.read().await.unwrap();
        assert_eq!(document, json!({ "routes": [] }));
    }

    #[tokio::test]
    async fn test_writes_are_pretty_printed() {
        let (_dir, store) = store_with(&json!({}));

        store
            .write(patch(json!({ "planets": { "Hoth": { "x": 0, "y": 0, "faction": "NEUTRAL" } } })))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("{\n  \"planets\""));
    }

    #[tokio::test]
    async fn test_ensure_exists_seeds_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("data.json"));

        store.ensure_exists().await.unwrap();
        assert_eq!(store.read().await.unwrap(), json!({}));

        store.write(patch(json!({ "routes": [] }))).await.unwrap();
        // A second call must not clobber the document
        store.ensure_exists().await.unwrap();
        assert_eq!(store.read().await.unwrap(), json!({ "routes": [] }));
    }
}
