//! Tag detail documents for the `sfn-tag-details` index.
//!
//! Stores cached metadata about each classification tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::document::IndexableDocument;

/// The index that tag detail documents are persisted to.
pub const TAG_INDEX: &str = "sfn-tag-details";

/// Source-record contract for tag detail documents.
///
/// Lists exactly the attributes the upstream model layer must expose.
/// Deserialization applies no defaulting, so a source object missing any of
/// these attributes fails at conversion time with an error naming the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagDetailsRecord {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub tag_groups: Vec<String>,
    pub doc_created: DateTime<Utc>,
    pub doc_updated: DateTime<Utc>,
    pub processed: i32,
}

/// Cached metadata about a classification tag.
///
/// # Fields
///
/// - `id`: externally assigned identifier, unique within the index
/// - `name`: display name (snowball-analyzed with a `raw` keyword sibling)
/// - `tag`: canonical tag value (keyword, exact match only)
/// - `tag_groups`: groups the tag belongs to (keyword, multi-valued)
/// - `doc_created` / `doc_updated`: document bookkeeping timestamps
/// - `processed`: integer status flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagDetailsDoc {
    /// Document id; stored as metadata, not part of the document body.
    #[serde(skip_serializing)]
    pub id: String,
    pub name: String,
    pub tag: String,
    pub tag_groups: Vec<String>,
    pub doc_created: DateTime<Utc>,
    pub doc_updated: DateTime<Utc>,
    pub processed: i32,
}

impl TagDetailsDoc {
    /// Build a document from a source record.
    ///
    /// Direct field-to-field copy, including the record id as the document
    /// id. No transformation, validation, or defaulting is applied.
    pub fn from_record(record: TagDetailsRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            tag: record.tag,
            tag_groups: record.tag_groups,
            doc_created: record.doc_created,
            doc_updated: record.doc_updated,
            processed: record.processed,
        }
    }
}

impl From<TagDetailsRecord> for TagDetailsDoc {
    fn from(record: TagDetailsRecord) -> Self {
        Self::from_record(record)
    }
}

impl IndexableDocument for TagDetailsDoc {
    fn index_name(&self) -> &'static str {
        TAG_INDEX
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_copies_every_field() {
        let record = TagDetailsRecord {
            id: "1".to_string(),
            name: "Malware X".to_string(),
            tag: "malware".to_string(),
            tag_groups: vec!["c2".to_string(), "botnet".to_string()],
            doc_created: "2023-01-01T00:00:00Z".parse().unwrap(),
            doc_updated: "2023-01-02T00:00:00Z".parse().unwrap(),
            processed: 0,
        };

        let doc = TagDetailsDoc::from_record(record.clone());

        assert_eq!(doc.id, "1");
        assert_eq!(doc.name, record.name);
        assert_eq!(doc.tag, record.tag);
        assert_eq!(doc.tag_groups, record.tag_groups);
        assert_eq!(doc.doc_created, record.doc_created);
        assert_eq!(doc.doc_updated, record.doc_updated);
        assert_eq!(doc.processed, record.processed);
    }

    #[test]
    fn test_index_name() {
        let doc = TagDetailsDoc::from_record(TagDetailsRecord {
            id: "1".to_string(),
            name: "Malware X".to_string(),
            tag: "malware".to_string(),
            tag_groups: vec![],
            doc_created: "2023-01-01T00:00:00Z".parse().unwrap(),
            doc_updated: "2023-01-02T00:00:00Z".parse().unwrap(),
            processed: 0,
        });
        assert_eq!(doc.index_name(), "sfn-tag-details");
        assert_eq!(doc.document_id(), "1");
    }

    #[test]
    fn test_record_missing_attribute_fails() {
        // No `tag` attribute on the source object.
        let value = json!({
            "id": "1",
            "name": "Malware X",
            "tag_groups": ["c2", "botnet"],
            "doc_created": "2023-01-01T00:00:00Z",
            "doc_updated": "2023-01-02T00:00:00Z",
            "processed": 0
        });

        let err = serde_json::from_value::<TagDetailsRecord>(value).unwrap_err();
        assert!(err.to_string().contains("tag"));
    }

    #[test]
    fn test_record_from_json_source() {
        let value = json!({
            "id": "1",
            "name": "Malware X",
            "tag": "malware",
            "tag_groups": ["c2", "botnet"],
            "doc_created": "2023-01-01T00:00:00Z",
            "doc_updated": "2023-01-02T00:00:00Z",
            "processed": 0
        });

        let record: TagDetailsRecord = serde_json::from_value(value).unwrap();
        let doc = TagDetailsDoc::from_record(record);

        assert_eq!(doc.id, "1");
        assert_eq!(doc.name, "Malware X");
        assert_eq!(doc.tag, "malware");
        assert_eq!(
            doc.tag_groups,
            vec!["c2".to_string(), "botnet".to_string()]
        );
        assert_eq!(doc.processed, 0);
    }
}
