//! Request and result types for search index operations.

use crate::errors::SearchIndexError;

/// Pass-through options for a single save operation.
///
/// Every option that is set is forwarded to the underlying backend call
/// unchanged; nothing here is interpreted or rewritten by this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveOptions {
    /// Refresh the affected shards after the operation so the document is
    /// immediately visible to search.
    pub refresh: bool,
    /// Custom routing value for shard selection.
    pub routing: Option<String>,
    /// Ingest pipeline to run the document through.
    pub pipeline: Option<String>,
    /// Operation timeout (e.g. "30s"), in the backend's duration syntax.
    pub timeout: Option<String>,
}

impl SaveOptions {
    /// Options requesting an immediate refresh after the save.
    pub fn with_refresh() -> Self {
        Self {
            refresh: true,
            ..Self::default()
        }
    }
}

/// Result of a batch save for a single document.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// The document's id.
    pub document_id: String,
    /// The index the document was saved to.
    pub index: String,
    /// Whether the save succeeded.
    pub success: bool,
    /// Error if the save failed.
    pub error: Option<SearchIndexError>,
}

/// Summary of a batch save containing aggregate statistics and individual
/// results.
///
/// Allows callers to handle partial failures: the batch continues past
/// individual save errors and reports each outcome.
#[derive(Debug, Clone)]
pub struct BatchOperationSummary {
    /// Total number of documents in the batch.
    pub total: usize,
    /// Number of successful saves.
    pub succeeded: usize,
    /// Number of failed saves.
    pub failed: usize,
    /// Individual results for each document.
    pub results: Vec<BatchOperationResult>,
}
