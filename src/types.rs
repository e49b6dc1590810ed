//! Core types for items-api

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Record ID type, as rendered on the wire
pub type RecordId = String;

/// Record represents a single stored item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Assigned by the store on insert; omitted while unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Attach a store-assigned identifier.
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Current time, rounded up to the millisecond precision of a BSON datetime.
///
/// Rounding up keeps a stored `created_at` from ever reading back earlier than
/// the moment the create request arrived.
pub fn creation_time() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_round_up(TimeDelta::milliseconds(1)).unwrap_or(now)
}

/// Body accepted by `POST /items`.
///
/// Only `name` and `description` are read, and both must be strings. Any other
/// field, including a client-supplied `id` or `created_at`, is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub description: String,
}

impl NewRecord {
    /// Stamp the creation time, producing a record ready for insertion.
    pub fn into_record(self, created_at: DateTime<Utc>) -> Record {
        Record {
            id: None,
            name: self.name,
            description: self.description,
            created_at,
        }
    }
}

/// Response body of a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: RecordId,
}

/// Response body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_new_record_ignores_server_assigned_fields() {
        let body = json!({
            "id": "client-id",
            "name": "widget",
            "description": "a small widget",
            "created_at": "1999-01-01T00:00:00Z",
            "colour": "blue"
        });

        let new: NewRecord = serde_json::from_value(body).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = new.into_record(now);

        assert_eq!(record.id, None);
        assert_eq!(record.name, "widget");
        assert_eq!(record.description, "a small widget");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_record_requires_name_and_description() {
        assert!(serde_json::from_value::<NewRecord>(json!({ "name": "only" })).is_err());
        assert!(serde_json::from_value::<NewRecord>(json!({ "description": "only" })).is_err());
        assert!(
            serde_json::from_value::<NewRecord>(json!({ "name": 7, "description": "x" })).is_err()
        );
        assert!(serde_json::from_value::<NewRecord>(json!(["name", "description"])).is_err());
    }

    #[test]
    fn test_creation_time_has_whole_milliseconds() {
        let before = Utc::now();
        let stamped = creation_time();

        assert!(stamped >= before);
        assert_eq!(stamped.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_record_wire_shape() {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let record = Record {
            id: None,
            name: "a".to_string(),
            description: "b".to_string(),
            created_at,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["created_at"], "2024-05-01T12:30:00Z");

        let value = serde_json::to_value(record.with_id("abc")).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["name"], "a");
        assert_eq!(value["description"], "b");
    }
}
