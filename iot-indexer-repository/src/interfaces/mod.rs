//! Interface definitions for the IoT indexer repository.
//!
//! This module defines the abstract `SearchIndexProvider` trait that allows
//! for dependency injection and swappable search backend implementations,
//! and the `RecordSource` trait that supplies the records to be indexed.

mod record_source;
mod search_index_provider;

pub use record_source::RecordSource;
pub use search_index_provider::SearchIndexProvider;
