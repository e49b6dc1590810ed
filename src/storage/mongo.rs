//! MongoDB storage backend

use async_trait::async_trait;
use bson::{doc, Bson};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::types::{Record, RecordId};
use crate::{Error, Result};

use super::RecordStore;

/// Storage encoding of a record.
///
/// `_id` is left out on insert so the server assigns an `ObjectId`. On read it is
/// kept as raw BSON, since documents written by other tools may use other id types.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    name: String,
    description: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl From<Record> for RecordDocument {
    fn from(record: Record) -> Self {
        Self {
            id: record.id.map(Bson::String),
            name: record.name,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

impl From<RecordDocument> for Record {
    fn from(document: RecordDocument) -> Self {
        Self {
            id: document.id.as_ref().map(render_id),
            name: document.name,
            description: document.description,
            created_at: document.created_at,
        }
    }
}

/// Render a store-native id as a wire id
fn render_id(id: &Bson) -> RecordId {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn query_error(err: mongodb::error::Error) -> Error {
    Error::query(err.to_string())
}

/// MongoDB collection handle
pub struct MongoStore {
    client: Client,
    collection: Collection<RecordDocument>,
}

impl MongoStore {
    /// Open a client and verify the deployment is reachable.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::connection(format!("invalid MongoDB target: {}", e)))?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| Error::connection(format!("MongoDB unreachable: {}", e)))?;

        tracing::info!(database, collection, "Connected to MongoDB");

        Ok(Self {
            collection: db.collection(collection),
            client,
        })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    async fn list_all(&self) -> Result<Vec<Record>> {
        let cursor = self.collection.find(doc! {}).await.map_err(query_error)?;
        let documents: Vec<RecordDocument> = cursor.try_collect().await.map_err(query_error)?;
        Ok(documents.into_iter().map(Record::from).collect())
    }

    async fn insert_one(&self, record: Record) -> Result<RecordId> {
        let result = self
            .collection
            .insert_one(RecordDocument::from(record))
            .await
            .map_err(query_error)?;
        Ok(render_id(&result.inserted_id))
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
