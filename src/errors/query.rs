//! Shared error types for indexer query operations.
//!
//! This module provides error types for common failures when encoding,
//! transporting, and decoding aggregation queries against an SLPDB-style
//! indexer endpoint.

use crate::query::QueryKind;

/// Errors that can occur while executing indexer queries.
///
/// This error type captures the common failure modes of the query transport:
/// endpoint validation, wire encoding, the HTTP round trip itself, and
/// decoding of the response collections. It includes the [`QueryKind`] being
/// executed to aid in debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{HttpQueryClient, QueryError};
///
/// match HttpQueryClient::new("ftp://slpdb.example.com") {
///     Err(QueryError::InvalidEndpoint { url, reason }) => {
///         eprintln!("Bad endpoint {url}: {reason}");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The configured endpoint is not an http(s) URL.
    ///
    /// Endpoints are validated at client construction so that a
    /// misconfigured base URL fails before the first query is issued.
    #[error("Invalid query endpoint {url}: {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint string
        url: String,
        /// Why the endpoint was rejected
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild {
        /// The underlying client builder error
        #[source]
        source: reqwest::Error,
    },

    /// Failed to serialize a query document for the wire.
    #[error("Failed to encode {kind} query document")]
    EncodeFailed {
        /// The query being encoded
        kind: QueryKind,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP round trip to the indexer failed.
    ///
    /// This covers connection failures, timeouts, and TLS problems. The
    /// indexer itself never saw the query, or its answer never arrived.
    #[error("Query {kind} failed against the indexer")]
    RequestFailed {
        /// The query being executed
        kind: QueryKind,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The indexer answered with a non-success HTTP status.
    #[error("Indexer returned status {status} for {kind} query")]
    ServiceStatus {
        /// The query being executed
        kind: QueryKind,
        /// The HTTP status reported by the indexer
        status: reqwest::StatusCode,
    },

    /// A response collection could not be decoded into the expected shape.
    #[error("Failed to decode documents from the {collection:?} collection")]
    DecodeFailed {
        /// Response collection key ("c", "u", "t" or "s")
        collection: &'static str,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The response decoded but did not contain the expected data.
    ///
    /// This typically means the indexer is still syncing or its status
    /// collection is empty.
    #[error("Query response missing {what}")]
    MissingData {
        /// Description of the missing piece
        what: String,
    },
}

impl QueryError {
    /// Create an `InvalidEndpoint` error with a reason.
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a `ClientBuild` error from the underlying builder failure.
    pub fn client_build(source: reqwest::Error) -> Self {
        QueryError::ClientBuild { source }
    }

    /// Create an `EncodeFailed` error for a query kind.
    pub fn encode_failed(kind: QueryKind, source: serde_json::Error) -> Self {
        QueryError::EncodeFailed { kind, source }
    }

    /// Create a `RequestFailed` error for a query kind.
    pub fn request_failed(kind: QueryKind, source: reqwest::Error) -> Self {
        QueryError::RequestFailed { kind, source }
    }

    /// Create a `DecodeFailed` error for a response collection.
    pub fn decode_failed(collection: &'static str, source: serde_json::Error) -> Self {
        QueryError::DecodeFailed { collection, source }
    }

    /// Create a `MissingData` error with a description.
    pub fn missing_data(what: impl Into<String>) -> Self {
        QueryError::MissingData { what: what.into() }
    }
}
