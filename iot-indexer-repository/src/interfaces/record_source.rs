//! Record source trait definition.
//!
//! The enumeration seam between the indexer and whatever model layer owns
//! the source records.

use async_trait::async_trait;

use crate::errors::SearchIndexError;

/// Supplies the source records to be indexed.
///
/// Implemented by the application's model/data-access layer and injected
/// into `IotIndexService::index_source`. No filtering, pagination, or error
/// handling is imposed here; the implementor owns all of it.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// The source-record type this source enumerates.
    type Record: Send;

    /// Enumerate the records to be indexed.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Record>)` - The records to index, in source order
    /// * `Err(SearchIndexError)` - If enumeration fails
    async fn get_objects(&self) -> Result<Vec<Self::Record>, SearchIndexError>;
}
