// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Query transport over HTTP.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::SlpscanConfig;
use crate::errors::QueryError;
use crate::query::document::QueryDocument;
use crate::query::response::QueryResponse;

/// Capability for executing aggregation queries against an indexer.
///
/// [`SnapshotCalculator`](crate::snapshot::SnapshotCalculator) and
/// [`TokenDiscovery`](crate::discovery::TokenDiscovery) are generic over
/// this trait, which keeps them testable against canned responses and open
/// to transports other than plain HTTP.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Execute one query document and return the raw response envelope.
    async fn execute(&self, query: &QueryDocument) -> Result<QueryResponse, QueryError>;
}

/// Query client speaking the indexer's base64-over-GET wire protocol.
///
/// Queries are serialized to JSON, base64 encoded, and issued as
/// `GET <endpoint>/q/<encoded>`. The endpoint is validated at construction
/// so a misconfigured base URL fails before any query is attempted.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::HttpQueryClient;
///
/// let client = HttpQueryClient::new("https://slpdb.fountainhead.cash")?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpQueryClient {
    /// Create a client for `endpoint` with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidEndpoint`] unless the endpoint is a
    /// well-formed http(s) URL.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, QueryError> {
        Self::with_config(endpoint, &SlpscanConfig::default())
    }

    /// Create a client for `endpoint` honoring `config.request_timeout`.
    pub fn with_config(
        endpoint: impl AsRef<str>,
        config: &SlpscanConfig,
    ) -> Result<Self, QueryError> {
        let endpoint = endpoint.as_ref();
        let parsed: url::Url = endpoint.parse().map_err(|e| {
            warn!(url = endpoint, error = ?e, "Invalid indexer endpoint");
            QueryError::invalid_endpoint(endpoint, format!("{e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(QueryError::invalid_endpoint(
                endpoint,
                format!("unsupported scheme {:?}", parsed.scheme()),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(QueryError::client_build)?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The validated base URL queries are issued against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    async fn execute(&self, query: &QueryDocument) -> Result<QueryResponse, QueryError> {
        let url = format!("{}/q/{}", self.endpoint, query.encode()?);
        debug!(kind = %query.kind(), "Executing indexer query");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| QueryError::request_failed(query.kind(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(kind = %query.kind(), status = %status, "Indexer rejected query");
            return Err(QueryError::ServiceStatus {
                kind: query.kind(),
                status,
            });
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| QueryError::request_failed(query.kind(), e))
    }
}
