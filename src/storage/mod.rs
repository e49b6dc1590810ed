//! Storage abstraction layer
//!
//! Provides a unified interface over the record collection, backed either by
//! MongoDB or by process memory.

use async_trait::async_trait;

use crate::types::{Record, RecordId};
use crate::Result;

pub mod memory;
pub mod mongo;

/// Record store trait
///
/// A single handle is shared by every request task, so implementations must be
/// safe for concurrent use without outside locking.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name, reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Read every record in the collection, in the store's natural order
    async fn list_all(&self) -> Result<Vec<Record>>;

    /// Persist a new record and return its store-generated id
    async fn insert_one(&self, record: Record) -> Result<RecordId>;

    /// Release the underlying connection
    async fn shutdown(&self);
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    MongoDb {
        uri: String,
        database: String,
        collection: String,
    },
    Memory,
}

/// Create storage backend from config
pub async fn create_storage(config: StorageConfig) -> Result<Box<dyn RecordStore>> {
    match config {
        StorageConfig::MongoDb {
            uri,
            database,
            collection,
        } => {
            let backend = mongo::MongoStore::connect(&uri, &database, &collection).await?;
            Ok(Box::new(backend))
        }
        StorageConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
