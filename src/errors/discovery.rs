//! Error types for token discovery searches.

use super::QueryError;

/// Errors that can occur during token discovery.
///
/// Discovery searches take hex-encoded document hashes from callers; the
/// hash is validated and re-encoded for the indexer before any network
/// traffic happens.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// The supplied document hash is not valid hex.
    #[error("Invalid document hash {value:?}: {reason}")]
    InvalidDocHash {
        /// The rejected input
        value: String,
        /// Why the input was rejected
        reason: String,
    },

    /// An underlying indexer query failed.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

impl DiscoveryError {
    /// Create an `InvalidDocHash` error with a reason.
    pub fn invalid_doc_hash(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DiscoveryError::InvalidDocHash {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
