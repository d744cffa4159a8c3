// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for slpscan integration tests
//!
//! Provides mock implementations of the network capabilities so the
//! calculators can be tested without an indexer or a node.

// Each test binary compiles its own copy of this module and none of them
// uses every helper.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use slpscan::{
    BlockHeight, LedgerNode, NodeError, QueryClient, QueryDocument, QueryError, QueryKind,
    QueryResponse, TokenId, UnixTimestamp,
};

/// Token id used across snapshot tests (SPICE)
pub const TEST_TOKEN: &str = "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf";

pub fn test_token() -> TokenId {
    TEST_TOKEN.parse().unwrap()
}

/// Mock QueryClient serving canned responses per query kind
///
/// Kinds without a canned response answer with an empty envelope. Every
/// call is counted, so tests can assert that validation failures issue no
/// queries at all.
///
/// # Example
///
/// ```rust,ignore
/// let client = MockQueryClient::new()
///     .with_confirmed(QueryKind::UnspentAtCutoff, vec![doc])
///     .failing(QueryKind::SpentInMempool);
///
/// let calculator = SnapshotCalculator::new(client);
/// ```
pub struct MockQueryClient {
    responses: HashMap<QueryKind, QueryResponse>,
    fail_kinds: HashSet<QueryKind>,
    calls: Arc<AtomicUsize>,
}

impl MockQueryClient {
    /// Create a mock that answers every query with an empty envelope
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fail_kinds: HashSet::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the canned response for one query kind
    pub fn with_response(mut self, kind: QueryKind, response: QueryResponse) -> Self {
        self.responses.insert(kind, response);
        self
    }

    /// Set the confirmed-collection documents for one query kind
    pub fn with_confirmed(self, kind: QueryKind, docs: Vec<Value>) -> Self {
        let response = QueryResponse {
            c: docs,
            ..Default::default()
        };
        self.with_response(kind, response)
    }

    /// Make one query kind fail with an HTTP 502
    pub fn failing(mut self, kind: QueryKind) -> Self {
        self.fail_kinds.insert(kind);
        self
    }

    /// Handle to the call counter, usable after the mock is handed to a
    /// calculator
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl QueryClient for MockQueryClient {
    async fn execute(&self, query: &QueryDocument) -> Result<QueryResponse, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let kind = query.kind();
        if self.fail_kinds.contains(&kind) {
            return Err(QueryError::ServiceStatus {
                kind,
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }

        Ok(self.responses.get(&kind).cloned().unwrap_or_default())
    }
}

/// Mock LedgerNode over a synthetic chain
///
/// Heights index into the timestamp list; the tip is the last entry.
/// Lookups are counted so tests can bound the scan work performed.
pub struct MockLedgerNode {
    timestamps: Vec<i64>,
    lookups: Arc<AtomicUsize>,
}

impl MockLedgerNode {
    /// Create a chain from explicit per-height timestamps (height 0 first)
    pub fn new(timestamps: Vec<i64>) -> Self {
        Self {
            timestamps,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a chain of `count` blocks spaced `step` seconds apart
    pub fn with_spacing(count: usize, start: i64, step: i64) -> Self {
        Self::new((0..count).map(|h| start + step * h as i64).collect())
    }

    /// Handle to the lookup counter, usable after the mock is handed to a
    /// resolver
    pub fn lookup_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.lookups)
    }
}

#[async_trait]
impl LedgerNode for MockLedgerNode {
    async fn best_height(&self) -> Result<BlockHeight, NodeError> {
        Ok(self.timestamps.len().saturating_sub(1) as BlockHeight)
    }

    async fn block_timestamp(&self, height: BlockHeight) -> Result<UnixTimestamp, NodeError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.timestamps
            .get(height as usize)
            .map(|&ts| UnixTimestamp(ts))
            .ok_or(NodeError::BlockNotFound { height })
    }
}

/// Indexer document for an unspent output, as the snapshot queries project it
pub fn txo_doc(txid: &str, vout: u32, address: &str, amount: &str, blk: u64) -> Value {
    json!({
        "txid": txid,
        "vout": vout,
        "address": address,
        "slpAmount": amount,
        "blk": blk,
    })
}
