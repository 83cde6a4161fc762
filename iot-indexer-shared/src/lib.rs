//! # IoT Indexer Shared
//!
//! This crate defines shared data structures used across the IoT security
//! event indexer. It includes the document types persisted to the search
//! engine and the source-record contracts they are converted from.

pub mod types;

pub use types::document::IndexableDocument;
pub use types::iot_details::{IotDetailsDoc, IotDetailsRecord, DETAILS_INDEX};
pub use types::iot_event::{IotEventDoc, IotEventRecord, SfnIot, EVENT_INDEX_PATTERN};
pub use types::tag_details::{TagDetailsDoc, TagDetailsRecord, TAG_INDEX};
