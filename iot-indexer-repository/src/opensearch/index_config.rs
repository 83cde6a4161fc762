//! OpenSearch index configuration and mappings.
//!
//! This module defines the settings and mappings for the three document
//! indices. Field names, the `snowball` analyzer choice, and the `raw`
//! keyword sub-field are compatibility-critical: existing indices and query
//! layers depend on these exact shapes.

use serde_json::{json, Value};

pub use iot_indexer_shared::{DETAILS_INDEX, EVENT_INDEX_PATTERN, TAG_INDEX};

/// Name of the index template that installs the event mappings.
pub const EVENT_TEMPLATE_NAME: &str = "iot-events";

/// Snowball-analyzed text with an exact-match `raw` keyword sibling.
///
/// The standard dual-field idiom: the analyzed field supports relevance
/// search, the `raw` sub-field supports exact filtering, sorting, and
/// aggregation on the same logical value.
fn snowball_with_raw() -> Value {
    json!({
        "type": "text",
        "analyzer": "snowball",
        "fields": {
            "raw": {
                "type": "keyword"
            }
        }
    })
}

/// Snowball-analyzed text without an exact-match sibling.
fn snowball() -> Value {
    json!({
        "type": "text",
        "analyzer": "snowball"
    })
}

/// Plain text with an exact-match `raw` keyword sibling.
fn text_with_raw() -> Value {
    json!({
        "type": "text",
        "fields": {
            "raw": {
                "type": "keyword"
            }
        }
    })
}

/// Settings and mappings for the `sfn-iot-details` index.
pub fn details_index_body() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "name": snowball_with_raw(),
                "tags": { "type": "keyword" },
                "doc_created": { "type": "date" },
                "doc_updated": { "type": "date" },
                "processed": { "type": "integer" }
            }
        }
    })
}

/// Settings and mappings for the `sfn-tag-details` index.
pub fn tag_index_body() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "name": snowball_with_raw(),
                "tag": { "type": "keyword" },
                "tag_groups": { "type": "keyword" },
                "doc_created": { "type": "date" },
                "doc_updated": { "type": "date" },
                "processed": { "type": "integer" }
            }
        }
    })
}

/// Index template body for the time-partitioned `iot-*` event indices.
///
/// Event documents carry a single embedded `IoT` object; the template makes
/// every concrete index matching the pattern inherit its mappings.
pub fn event_index_template_body() -> Value {
    json!({
        "index_patterns": [EVENT_INDEX_PATTERN],
        "template": {
            "settings": {
                "number_of_shards": 1,
                "number_of_replicas": 1
            },
            "mappings": {
                "properties": {
                    "IoT": {
                        "properties": {
                            "event_type": { "type": "text" },
                            "domain_name": snowball_with_raw(),
                            "device_name": snowball_with_raw(),
                            "host": snowball_with_raw(),
                            "threat_id": snowball(),
                            "threat_name": snowball(),
                            "tag_name": text_with_raw(),
                            "tag_class": text_with_raw(),
                            "tag_group": text_with_raw(),
                            "tag_description": snowball(),
                            "public_tag_name": snowball(),
                            "confidence_level": { "type": "integer" },
                            "sample_date": { "type": "date" },
                            "file_type": text_with_raw(),
                            "updated_at": { "type": "date" },
                            "processed": { "type": "integer" },
                            "src_ip": { "type": "ip" },
                            "dst_ip": { "type": "ip" }
                        }
                    }
                }
            }
        }
    })
}
