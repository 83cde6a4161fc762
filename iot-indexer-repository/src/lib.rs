//! # IoT Indexer Repository
//!
//! This crate provides traits and implementations for persisting IoT
//! security event documents to the search index. It includes definitions
//! for errors, interfaces, and a concrete implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;

pub use config::IndexServiceConfig;
pub use errors::SearchIndexError;
pub use interfaces::{RecordSource, SearchIndexProvider};
pub use opensearch::OpenSearchProvider;
pub use service::IotIndexService;
pub use types::{BatchOperationResult, BatchOperationSummary, SaveOptions};
