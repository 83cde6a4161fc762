//! IoT detail documents for the `sfn-iot-details` index.
//!
//! This module defines the cached metadata document for an IoT-associated
//! IP/entity and the source-record contract it is converted from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::document::IndexableDocument;

/// The index that IoT detail documents are persisted to.
pub const DETAILS_INDEX: &str = "sfn-iot-details";

/// Source-record contract for IoT detail documents.
///
/// Lists exactly the attributes the upstream model layer must expose.
/// Deserialization applies no defaulting, so a source object missing any of
/// these attributes fails at conversion time with an error naming the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IotDetailsRecord {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub doc_created: DateTime<Utc>,
    pub doc_updated: DateTime<Utc>,
    pub processed: i32,
}

/// Cached metadata about an IoT-associated IP/entity.
///
/// # Fields
///
/// - `id`: externally assigned identifier, unique within the index
/// - `name`: display name (snowball-analyzed with a `raw` keyword sibling)
/// - `tags`: classification tags (keyword, multi-valued)
/// - `doc_created` / `doc_updated`: document bookkeeping timestamps
/// - `processed`: integer status flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IotDetailsDoc {
    /// Document id; stored as metadata, not part of the document body.
    #[serde(skip_serializing)]
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub doc_created: DateTime<Utc>,
    pub doc_updated: DateTime<Utc>,
    pub processed: i32,
}

impl IotDetailsDoc {
    /// Build a document from a source record.
    ///
    /// Direct field-to-field copy, including the record id as the document
    /// id. No transformation, validation, or defaulting is applied.
    pub fn from_record(record: IotDetailsRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            tags: record.tags,
            doc_created: record.doc_created,
            doc_updated: record.doc_updated,
            processed: record.processed,
        }
    }
}

impl From<IotDetailsRecord> for IotDetailsDoc {
    fn from(record: IotDetailsRecord) -> Self {
        Self::from_record(record)
    }
}

impl IndexableDocument for IotDetailsDoc {
    fn index_name(&self) -> &'static str {
        DETAILS_INDEX
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> IotDetailsRecord {
        IotDetailsRecord {
            id: "10.1.1.7".to_string(),
            name: "lobby-camera".to_string(),
            tags: vec!["camera".to_string(), "mirai".to_string()],
            doc_created: "2023-01-01T00:00:00Z".parse().unwrap(),
            doc_updated: "2023-01-02T00:00:00Z".parse().unwrap(),
            processed: 0,
        }
    }

    #[test]
    fn test_from_record_copies_every_field() {
        let record = sample_record();
        let doc = IotDetailsDoc::from_record(record.clone());

        assert_eq!(doc.id, record.id);
        assert_eq!(doc.name, record.name);
        assert_eq!(doc.tags, record.tags);
        assert_eq!(doc.doc_created, record.doc_created);
        assert_eq!(doc.doc_updated, record.doc_updated);
        assert_eq!(doc.processed, record.processed);
    }

    #[test]
    fn test_index_name() {
        let doc = IotDetailsDoc::from_record(sample_record());
        assert_eq!(doc.index_name(), "sfn-iot-details");
        assert_eq!(doc.document_id(), "10.1.1.7");
    }

    #[test]
    fn test_id_excluded_from_body() {
        let doc = IotDetailsDoc::from_record(sample_record());
        let body = serde_json::to_value(&doc).unwrap();

        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "lobby-camera");
        assert_eq!(body["tags"], json!(["camera", "mirai"]));
        assert_eq!(body["processed"], 0);
    }

    #[test]
    fn test_record_missing_attribute_fails() {
        // No `tags` attribute on the source object.
        let value = json!({
            "id": "10.1.1.7",
            "name": "lobby-camera",
            "doc_created": "2023-01-01T00:00:00Z",
            "doc_updated": "2023-01-02T00:00:00Z",
            "processed": 0
        });

        let err = serde_json::from_value::<IotDetailsRecord>(value).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }
}
