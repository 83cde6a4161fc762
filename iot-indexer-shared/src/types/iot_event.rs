//! IoT event documents for the time-partitioned `iot-*` indices.
//!
//! Each observed security event is its own document: an id plus one embedded
//! `SfnIot` object describing the event. Events are written once and are
//! immutable afterwards except for the `processed`/`updated_at` bookkeeping
//! fields.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::document::IndexableDocument;

/// The index pattern that IoT event documents are persisted under.
pub const EVENT_INDEX_PATTERN: &str = "iot-*";

/// Source-record contract for IoT event documents.
///
/// Lists exactly the attributes the upstream model layer must expose.
/// Deserialization applies no defaulting, so a source object missing any of
/// these attributes fails at conversion time with an error naming the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IotEventRecord {
    pub id: String,
    pub domain_name: String,
    pub device_name: String,
    pub host: String,
    pub threat_id: String,
    /// Required on upstream event records, but has no counterpart in the
    /// event mapping; accepted and left unmapped.
    pub event_tag: String,
    /// Required on upstream event records, but has no counterpart in the
    /// event mapping; accepted and left unmapped.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub processed: i32,
    pub src_ip: IpAddr,
    pub dst_ip: IpAddr,
}

/// Embedded event description stored inline within an [`IotEventDoc`].
///
/// Not independently persisted; it has no index identity of its own. All
/// fields are optional and unset fields are omitted from the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SfnIot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_ip: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_ip: Option<IpAddr>,
}

/// One record per observed security event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IotEventDoc {
    /// Document id; stored as metadata, not part of the document body.
    #[serde(skip_serializing)]
    pub id: String,
    /// The embedded event description. Serialized as `IoT`: existing
    /// `iot-*` indices address the embedded fields under that exact name.
    #[serde(rename = "IoT")]
    pub iot: SfnIot,
}

impl IotEventDoc {
    /// Build an event document from a source record.
    ///
    /// The mapped record fields are copied into the embedded `iot` object;
    /// fields the record does not carry stay unset. `event_tag` and
    /// `created_at` are consumed without being mapped: the event schema
    /// declares no destination for them.
    pub fn from_record(record: IotEventRecord) -> Self {
        Self {
            id: record.id,
            iot: SfnIot {
                domain_name: Some(record.domain_name),
                device_name: Some(record.device_name),
                host: Some(record.host),
                threat_id: Some(record.threat_id),
                updated_at: Some(record.updated_at),
                processed: Some(record.processed),
                src_ip: Some(record.src_ip),
                dst_ip: Some(record.dst_ip),
                ..SfnIot::default()
            },
        }
    }
}

impl From<IotEventRecord> for IotEventDoc {
    fn from(record: IotEventRecord) -> Self {
        Self::from_record(record)
    }
}

impl IndexableDocument for IotEventDoc {
    fn index_name(&self) -> &'static str {
        EVENT_INDEX_PATTERN
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> IotEventRecord {
        IotEventRecord {
            id: "evt-42".to_string(),
            domain_name: "update.badcdn.example".to_string(),
            device_name: "thermostat-2f".to_string(),
            host: "gw-03".to_string(),
            threat_id: "109001002".to_string(),
            event_tag: "Unit42.Mirai".to_string(),
            created_at: "2023-03-01T09:30:00Z".parse().unwrap(),
            updated_at: "2023-03-01T09:31:00Z".parse().unwrap(),
            processed: 0,
            src_ip: "10.0.0.12".parse().unwrap(),
            dst_ip: "203.0.113.9".parse().unwrap(),
        }
    }

    #[test]
    fn test_from_record_populates_embedded_object() {
        let record = sample_record();
        let doc = IotEventDoc::from_record(record.clone());

        assert_eq!(doc.id, "evt-42");
        assert_eq!(doc.iot.domain_name.as_deref(), Some("update.badcdn.example"));
        assert_eq!(doc.iot.device_name.as_deref(), Some("thermostat-2f"));
        assert_eq!(doc.iot.host.as_deref(), Some("gw-03"));
        assert_eq!(doc.iot.threat_id.as_deref(), Some("109001002"));
        assert_eq!(doc.iot.updated_at, Some(record.updated_at));
        assert_eq!(doc.iot.processed, Some(0));
        assert_eq!(doc.iot.src_ip, Some(record.src_ip));
        assert_eq!(doc.iot.dst_ip, Some(record.dst_ip));
        // Fields the record does not carry stay unset.
        assert!(doc.iot.event_type.is_none());
        assert!(doc.iot.threat_name.is_none());
        assert!(doc.iot.sample_date.is_none());
    }

    #[test]
    fn test_embedded_object_serializes_as_iot_field() {
        let doc = IotEventDoc::from_record(sample_record());
        let body = serde_json::to_value(&doc).unwrap();

        // The embedded object lives under `IoT`, the exact field name the
        // event indices were created with.
        assert!(body.get("IoT").is_some());
        assert!(body.get("iot").is_none());
    }

    #[test]
    fn test_unmapped_record_fields_absent_from_body() {
        let doc = IotEventDoc::from_record(sample_record());
        let body = serde_json::to_value(&doc).unwrap();

        assert!(body.get("id").is_none());
        assert!(body.get("event_tag").is_none());
        assert!(body.get("created_at").is_none());
        assert!(body["IoT"].get("event_tag").is_none());
        assert!(body["IoT"].get("created_at").is_none());
        assert_eq!(body["IoT"]["domain_name"], "update.badcdn.example");
        assert_eq!(body["IoT"]["src_ip"], "10.0.0.12");
    }

    #[test]
    fn test_unset_fields_skipped_in_body() {
        let doc = IotEventDoc::from_record(sample_record());
        let body = serde_json::to_value(&doc).unwrap();

        assert!(body["IoT"].get("event_type").is_none());
        assert!(body["IoT"].get("threat_name").is_none());
        assert!(body["IoT"].get("confidence_level").is_none());
        assert!(body["IoT"].get("file_type").is_none());
    }

    #[test]
    fn test_index_pattern() {
        let doc = IotEventDoc::from_record(sample_record());
        assert_eq!(doc.index_name(), "iot-*");
    }

    #[test]
    fn test_record_missing_attribute_fails() {
        // No `event_tag` attribute: still part of the source contract even
        // though the mapping declares no destination for it.
        let value = json!({
            "id": "evt-42",
            "domain_name": "update.badcdn.example",
            "device_name": "thermostat-2f",
            "host": "gw-03",
            "threat_id": "109001002",
            "created_at": "2023-03-01T09:30:00Z",
            "updated_at": "2023-03-01T09:31:00Z",
            "processed": 0,
            "src_ip": "10.0.0.12",
            "dst_ip": "203.0.113.9"
        });

        let err = serde_json::from_value::<IotEventRecord>(value).unwrap_err();
        assert!(err.to_string().contains("event_tag"));
    }
}
