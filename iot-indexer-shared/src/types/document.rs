//! Shared contract for documents persisted to the search engine.

use serde::Serialize;

/// A document that can be persisted to a named search index.
///
/// Each schema type implements this trait so that the indexing service can
/// stay generic over the document shape: the trait exposes the target index
/// and the externally assigned document id, and `Serialize` provides the
/// document body.
///
/// The id is metadata, not part of the document body; implementors exclude
/// it from serialization.
pub trait IndexableDocument: Serialize + Send + Sync {
    /// The index (or index pattern) this document is persisted to.
    ///
    /// Returns a fixed literal. Existing indices and query layers depend on
    /// these exact names, so they must never be derived or rewritten.
    fn index_name(&self) -> &'static str;

    /// The externally assigned identifier, unique within the index.
    fn document_id(&self) -> &str;
}
