//! In-process record store

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::{Record, RecordId};
use crate::Result;

use super::RecordStore;

/// Memory-backed store; records live for the lifetime of the process
#[derive(Default)]
pub struct MemoryStore {
    /// Kept in insertion order
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn insert_one(&self, record: Record) -> Result<RecordId> {
        let id = Uuid::new_v4().simple().to_string();
        self.records.write().await.push(record.with_id(id.clone()));
        Ok(id)
    }

    async fn shutdown(&self) {}
}
