//! Record store interface and reference implementations

use crate::{CapturedRecord, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Read access to captured records, owned by the host application
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Look up a record by id
    async fn get_record_by_id(&self, id: &str) -> Result<CapturedRecord, StoreError>;
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<String, CapturedRecord>>>,
}

impl MemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning its id
    pub fn insert(&self, record: CapturedRecord) -> String {
        let id = record.id.clone();
        self.records.write().insert(id.clone(), record);
        id
    }

    /// Remove a record by id
    pub fn remove(&self, id: &str) -> Option<CapturedRecord> {
        self.records.write().remove(id)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl FromIterator<CapturedRecord> for MemoryRecordStore {
    fn from_iter<I: IntoIterator<Item = CapturedRecord>>(iter: I) -> Self {
        let store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_record_by_id(&self, id: &str) -> Result<CapturedRecord, StoreError> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// Records read once from a JSON file holding an array of records
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    inner: MemoryRecordStore,
}

impl JsonRecordStore {
    /// Load records from a file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::LoadError(format!("{}: {}", path.display(), e)))?;

        let store = Self::from_json(&content)?;
        debug!("loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse records from a JSON string
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let records: Vec<CapturedRecord> = serde_json::from_str(content)?;
        Ok(Self {
            inner: records.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl RecordStore for JsonRecordStore {
    async fn get_record_by_id(&self, id: &str) -> Result<CapturedRecord, StoreError> {
        self.inner.get_record_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_lookup() {
        let store = MemoryRecordStore::new();
        store.insert(CapturedRecord::new("a").with_principal("alice"));

        let record = store.get_record_by_id("a").await.unwrap();
        assert_eq!(record.principal, "alice");

        let missing = store.get_record_by_id("b").await;
        assert!(matches!(missing, Err(StoreError::NotFound(id)) if id == "b"));
    }

    #[tokio::test]
    async fn test_memory_store_remove() {
        let store: MemoryRecordStore = vec![CapturedRecord::new("a"), CapturedRecord::new("b")]
            .into_iter()
            .collect();
        assert_eq!(store.len(), 2);

        assert!(store.remove("a").is_some());
        assert!(store.get_record_by_id("a").await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_json_store() {
        let json = r#"[
            {"id": "1", "source": "demo", "principal": "alice"},
            {"id": "2", "source": "demo", "principal": "bob", "secret": "hunter2"}
        ]"#;

        let store = JsonRecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);

        let record = store.get_record_by_id("2").await.unwrap();
        assert_eq!(record.secret, "hunter2");
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        assert!(matches!(
            JsonRecordStore::from_json("{not json"),
            Err(StoreError::ParseError(_))
        ));
    }

    #[test]
    fn test_json_store_missing_file() {
        assert!(matches!(
            JsonRecordStore::open("/nonexistent/records.json"),
            Err(StoreError::LoadError(_))
        ));
    }
}
