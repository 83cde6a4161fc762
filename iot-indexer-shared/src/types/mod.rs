//! This module defines the document types indexed into the search engine and
//! the source-record contracts used to construct them.

pub mod document;
pub mod iot_details;
pub mod iot_event;
pub mod tag_details;

pub use document::IndexableDocument;
pub use iot_details::{IotDetailsDoc, IotDetailsRecord};
pub use iot_event::{IotEventDoc, IotEventRecord, SfnIot};
pub use tag_details::{TagDetailsDoc, TagDetailsRecord};
