//! Configuration types for the IotIndexService.

/// Configuration for the IotIndexService.
///
/// This struct allows customization of service behavior, particularly around
/// batch operation limits. Use this to control resource usage and prevent
/// accidentally sending overly large batches to the search index backend.
#[derive(Debug, Clone)]
pub struct IndexServiceConfig {
    /// Maximum number of documents allowed in a single batch save.
    ///
    /// Set to `None` to disable the limit (not recommended for production).
    /// Defaults to 1000 if not specified.
    pub max_batch_size: Option<usize>,
}

impl Default for IndexServiceConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
        }
    }
}

impl IndexServiceConfig {
    /// Create a config with no batch size limit.
    ///
    /// # Warning
    ///
    /// Use with caution. Removing batch size limits can lead to memory
    /// issues and timeouts when processing very large batches. Not
    /// recommended for production.
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
        }
    }

    /// Create a config with a custom batch size limit.
    ///
    /// # Arguments
    ///
    /// * `max_batch_size` - Maximum number of documents allowed in a single batch save
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(IndexServiceConfig::default().max_batch_size, Some(1000));
    }

    #[test]
    fn test_unlimited() {
        assert_eq!(IndexServiceConfig::unlimited().max_batch_size, None);
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(
            IndexServiceConfig::with_max_batch_size(50).max_batch_size,
            Some(50)
        );
    }
}
