//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts, IndicesPutIndexTemplateParts},
    params::Refresh,
    IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::{
    details_index_body, event_index_template_body, tag_index_body, DETAILS_INDEX,
    EVENT_TEMPLATE_NAME, TAG_INDEX,
};
use crate::types::SaveOptions;

/// OpenSearch provider implementation.
///
/// Persists IoT indexer documents using OpenSearch as the backend.
///
/// # Example
///
/// ```ignore
/// use iot_indexer_repository::types::SaveOptions;
///
/// let provider = OpenSearchProvider::new("http://localhost:9200").await?;
/// provider.ensure_indexes().await?;
/// provider
///     .save_document("sfn-tag-details", "1", body, &SaveOptions::default())
///     .await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If connection setup fails
    pub async fn new(url: &str) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch provider");

        Ok(Self { client })
    }

    /// Create one concrete index with the given body if it does not exist.
    async fn ensure_index(&self, index: &str, body: Value) -> Result<(), SearchIndexError> {
        let exists = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        if exists.status_code().is_success() {
            debug!(index = %index, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %error_body, "Index creation failed");
            return Err(SearchIndexError::index_creation(format!(
                "Creating index {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        info!(index = %index, "Created index");
        Ok(())
    }

    /// Install the event index template so time-partitioned indices inherit
    /// the event mappings.
    async fn ensure_event_template(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .put_index_template(IndicesPutIndexTemplateParts::Name(EVENT_TEMPLATE_NAME))
            .body(event_index_template_body())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Event template install failed");
            return Err(SearchIndexError::index_creation(format!(
                "Installing template {} failed with status {}: {}",
                EVENT_TEMPLATE_NAME, status, error_body
            )));
        }

        debug!(template = %EVENT_TEMPLATE_NAME, "Installed event index template");
        Ok(())
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    /// Ensure the detail and tag indices exist and the event index template
    /// is installed.
    async fn ensure_indexes(&self) -> Result<(), SearchIndexError> {
        self.ensure_index(DETAILS_INDEX, details_index_body())
            .await?;
        self.ensure_index(TAG_INDEX, tag_index_body()).await?;
        self.ensure_event_template().await
    }

    /// Persist one document body under the given index and id.
    ///
    /// Every option in `options` that is set is forwarded to the index call
    /// unchanged; a non-success response surfaces as `SearchIndexError` with
    /// the status and body the backend reported.
    async fn save_document(
        &self,
        index: &str,
        id: &str,
        body: Value,
        options: &SaveOptions,
    ) -> Result<(), SearchIndexError> {
        let mut request = self.client.index(IndexParts::IndexId(index, id)).body(body);

        if options.refresh {
            request = request.refresh(Refresh::True);
        }
        if let Some(ref routing) = options.routing {
            request = request.routing(routing);
        }
        if let Some(ref pipeline) = options.pipeline {
            request = request.pipeline(pipeline);
        }
        if let Some(ref timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(index = %index, doc_id = %id, status = %status, body = %error_body, "Save request failed");
            return Err(SearchIndexError::index(format!(
                "Save to {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, doc_id = %id, "Document saved");
        Ok(())
    }

    /// Check cluster health; green or yellow counts as healthy.
    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let status = health
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        debug!(status = %status, "Cluster health");

        Ok(status == "green" || status == "yellow")
    }
}
