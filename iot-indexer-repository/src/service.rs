//! IoT index service implementation.
//!
//! This module provides the main service for persisting IoT indexer
//! documents. Application code uses this to save detail, event, and tag
//! documents and to drive the enumerate/convert/save pipeline.

use crate::config::IndexServiceConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::{RecordSource, SearchIndexProvider};
use crate::types::{BatchOperationResult, BatchOperationSummary, SaveOptions};
use iot_indexer_shared::IndexableDocument;

/// The main service for persisting documents to the search index.
///
/// This is the high-level API that application code should use. It validates
/// input, serializes documents, and delegates to a `SearchIndexProvider` for
/// actual backend operations. All operations return `SearchIndexError` for
/// consistent error handling; backend failures propagate untouched.
///
/// # Example
///
/// ```no_run
/// use iot_indexer_repository::{IotIndexService, OpenSearchProvider, SaveOptions};
/// use iot_indexer_shared::{TagDetailsDoc, TagDetailsRecord};
///
/// # async fn example(record: TagDetailsRecord) -> Result<(), Box<dyn std::error::Error>> {
/// let provider = Box::new(OpenSearchProvider::new("http://localhost:9200").await?);
/// let service = IotIndexService::new(provider);
///
/// service.ensure_indexes().await?;
/// let doc = TagDetailsDoc::from_record(record);
/// service.save(&doc, &SaveOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
pub struct IotIndexService {
    provider: Box<dyn SearchIndexProvider>,
    config: IndexServiceConfig,
}

impl IotIndexService {
    /// Create a new IotIndexService with default configuration.
    ///
    /// The default configuration includes a batch size limit of 1000
    /// documents.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `SearchIndexProvider` (e.g., `OpenSearchProvider`)
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: IndexServiceConfig::default(),
        }
    }

    /// Create a new IotIndexService with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `SearchIndexProvider`
    /// * `config` - Custom configuration for the service
    pub fn with_config(
        provider: Box<dyn SearchIndexProvider>,
        config: IndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Ensure the indices and the event index template exist.
    ///
    /// Call this during application startup, before saving any document.
    pub async fn ensure_indexes(&self) -> Result<(), SearchIndexError> {
        self.provider.ensure_indexes().await
    }

    /// Check if the search backend is healthy and reachable.
    pub async fn health_check(&self) -> Result<bool, SearchIndexError> {
        self.provider.health_check().await
    }

    /// Persist one document to its declared index.
    ///
    /// The document id must be non-empty. The document body is serialized
    /// as-is and every option in `options` is forwarded to the backend call
    /// unchanged; failures propagate from the backend untouched.
    ///
    /// # Arguments
    ///
    /// * `doc` - The document to persist
    /// * `options` - Pass-through indexing options
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was persisted successfully
    /// * `Err(SearchIndexError::ValidationError)` - If the id is empty
    /// * `Err(SearchIndexError)` - If the save fails
    pub async fn save<D: IndexableDocument>(
        &self,
        doc: &D,
        options: &SaveOptions,
    ) -> Result<(), SearchIndexError> {
        if doc.document_id().is_empty() {
            return Err(SearchIndexError::validation("document id is required"));
        }

        let body = serde_json::to_value(doc)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        self.provider
            .save_document(doc.index_name(), doc.document_id(), body, options)
            .await
    }

    /// Persist multiple documents and return a summary of successful and
    /// failed saves.
    ///
    /// Each document is saved individually; the batch continues past
    /// individual failures and reports every outcome.
    ///
    /// # Arguments
    ///
    /// * `docs` - The documents to persist
    /// * `options` - Pass-through indexing options, applied to every save
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Aggregate statistics and individual results
    /// * `Err(SearchIndexError::BatchSizeExceeded)` - If the batch exceeds the configured maximum
    pub async fn save_all<D: IndexableDocument>(
        &self,
        docs: &[D],
        options: &SaveOptions,
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        self.validate_batch_size(docs.len())?;

        let mut results = Vec::new();
        let mut succeeded = 0;
        let mut failed = 0;

        for doc in docs {
            match self.save(doc, options).await {
                Ok(()) => {
                    succeeded += 1;
                    results.push(BatchOperationResult {
                        document_id: doc.document_id().to_string(),
                        index: doc.index_name().to_string(),
                        success: true,
                        error: None,
                    });
                }
                Err(e) => {
                    failed += 1;
                    results.push(BatchOperationResult {
                        document_id: doc.document_id().to_string(),
                        index: doc.index_name().to_string(),
                        success: false,
                        error: Some(e),
                    });
                }
            }
        }

        Ok(BatchOperationSummary {
            total: docs.len(),
            succeeded,
            failed,
            results,
        })
    }

    /// Enumerate records from a source, convert them, and persist the
    /// resulting documents.
    ///
    /// This is the composed indexing pipeline: `get_objects` on the injected
    /// source, a `From` conversion per record, then a batch save. Enumeration
    /// failures propagate before anything is saved.
    ///
    /// # Arguments
    ///
    /// * `source` - The record source to enumerate
    /// * `options` - Pass-through indexing options, applied to every save
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Aggregate statistics and individual results
    /// * `Err(SearchIndexError)` - If enumeration fails or the batch exceeds the configured maximum
    pub async fn index_source<S, D>(
        &self,
        source: &S,
        options: &SaveOptions,
    ) -> Result<BatchOperationSummary, SearchIndexError>
    where
        S: RecordSource,
        D: IndexableDocument + From<S::Record>,
    {
        let records = source.get_objects().await?;
        let docs: Vec<D> = records.into_iter().map(D::from).collect();
        self.save_all(&docs, options).await
    }
}
