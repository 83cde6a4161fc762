//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch,
//! Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::SaveOptions;

/// Abstracts the underlying search index implementation (OpenSearch,
/// Elasticsearch, etc.).
///
/// Implementations are injected into `IotIndexService` to enable dependency
/// injection and easy testing with mock implementations.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error
/// handling across different backend implementations.
///
/// # Index Initialization
///
/// Callers should invoke `ensure_indexes` during application startup so the
/// detail and tag indices and the event index template are in place before
/// any document is saved.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Ensure the concrete indices and the event index template exist,
    /// creating them with their mappings if necessary.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the indices are ready for use
    /// * `Err(SearchIndexError)` - If initialization fails
    async fn ensure_indexes(&self) -> Result<(), SearchIndexError>;

    /// Persist one document body under the given index and id.
    ///
    /// If a document with the same id already exists in the index it is
    /// replaced. Every option in `options` is forwarded to the backend call
    /// unchanged; failures propagate from the backend untouched.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index or index pattern
    /// * `id` - The externally assigned document id
    /// * `body` - The serialized document body
    /// * `options` - Pass-through indexing options
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was persisted successfully
    /// * `Err(SearchIndexError)` - If the save fails
    async fn save_document(
        &self,
        index: &str,
        id: &str,
        body: Value,
        options: &SaveOptions,
    ) -> Result<(), SearchIndexError>;

    /// Check if the search backend is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the backend is healthy
    /// * `Ok(false)` - If the backend is unhealthy
    /// * `Err(SearchIndexError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchIndexError>;
}
