// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Aggregation query documents for the indexer wire protocol
//!
//! SLPDB-style indexers accept MongoDB aggregation pipelines wrapped in a
//! versioned envelope, serialized to JSON, base64 encoded, and passed as a
//! GET path segment. This module builds the fixed set of pipelines slpscan
//! issues; the shapes follow the indexer's document model (`tx.h`
//! transaction hash, `blk.i` confirmation height, `graphTxn` spend graph,
//! `out.b*` parsed OP_RETURN pushes).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::QueryError;
use crate::types::records::BlockHeight;
use crate::types::token_id::TokenId;

/// The fixed set of aggregation queries slpscan issues.
///
/// Carried on every [`QueryDocument`] and reported in query errors and
/// spans so a failing pipeline can be identified without decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Outputs created at or below the cutoff and still unspent
    UnspentAtCutoff,
    /// Outputs created at or below the cutoff, spent above it
    SpentAfterCutoff,
    /// Outputs created at or below the cutoff whose spend is unconfirmed
    SpentInMempool,
    /// The indexer's best indexed height from its status collection
    IndexedHeight,
    /// Tokens whose genesis references a document hash
    DocHashSearch,
    /// NFTs minted under a group token
    GroupSearch,
}

impl QueryKind {
    /// Get the kind name for spans and error messages
    pub const fn name(&self) -> &'static str {
        match self {
            QueryKind::UnspentAtCutoff => "unspent_at_cutoff",
            QueryKind::SpentAfterCutoff => "spent_after_cutoff",
            QueryKind::SpentInMempool => "spent_in_mempool",
            QueryKind::IndexedHeight => "indexed_height",
            QueryKind::DocHashSearch => "doc_hash_search",
            QueryKind::GroupSearch => "group_search",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete query ready for the wire.
///
/// Serializes to the versioned envelope the indexer expects:
/// `{"v": 3, "q": {"db": [...], "aggregate": [...], "limit": N}}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDocument {
    #[serde(skip)]
    kind: QueryKind,
    v: u32,
    q: QueryBody,
}

#[derive(Debug, Clone, Serialize)]
struct QueryBody {
    db: Vec<&'static str>,
    aggregate: Vec<Value>,
    limit: u64,
}

/// First pipeline stages shared by the three TXO categories: select the
/// token's transactions up to the cutoff and join their spend graph.
fn txo_graph_stages(token: &TokenId, cutoff: BlockHeight) -> Vec<Value> {
    vec![
        json!({ "$match": {
            "$or": [ { "out.h4": token.as_str() }, { "tx.h": token.as_str() } ],
            "blk.i": { "$lte": cutoff },
        }}),
        json!({ "$lookup": {
            "from": "graphs",
            "localField": "tx.h",
            "foreignField": "graphTxn.txid",
            "as": "gtxn",
        }}),
        json!({ "$project": {
            "_id": 0,
            "txid": "$tx.h",
            "txo": "$gtxn.graphTxn.outputs",
            "blk": "$blk.i",
        }}),
        // Graph outputs arrive nested one level deep, hence the double unwind
        json!({ "$unwind": "$txo" }),
        json!({ "$unwind": "$txo" }),
    ]
}

impl QueryDocument {
    /// Outputs of `token` created at or below `cutoff` and never spent.
    pub fn unspent_at_cutoff(token: &TokenId, cutoff: BlockHeight, limit: u64) -> Self {
        let mut aggregate = txo_graph_stages(token, cutoff);
        aggregate.extend([
            json!({ "$match": { "txo.status": "UNSPENT" }}),
            json!({ "$project": {
                "slpAmount": "$txo.slpAmount",
                "address": "$txo.address",
                "vout": "$txo.vout",
                "txid": 1,
                "blk": 1,
            }}),
        ]);
        Self {
            kind: QueryKind::UnspentAtCutoff,
            v: 3,
            q: QueryBody {
                db: vec!["c"],
                aggregate,
                limit,
            },
        }
    }

    /// Outputs of `token` created at or below `cutoff` whose spend confirmed
    /// strictly above it. These were live balances as of the cutoff.
    pub fn spent_after_cutoff(token: &TokenId, cutoff: BlockHeight, limit: u64) -> Self {
        let mut aggregate = txo_graph_stages(token, cutoff);
        aggregate.extend([
            json!({ "$lookup": {
                "from": "confirmed",
                "localField": "txo.spendTxid",
                "foreignField": "tx.h",
                "as": "c",
            }}),
            json!({ "$unwind": "$c" }),
            json!({ "$project": {
                "spendTxid": "$txo.spendTxid",
                "slpAmount": "$txo.slpAmount",
                "address": "$txo.address",
                "vout": "$txo.vout",
                "spentAtBlock": "$c.blk.i",
                "txid": 1,
                "blk": 1,
            }}),
            json!({ "$match": { "spentAtBlock": { "$gt": cutoff } }}),
        ]);
        Self {
            kind: QueryKind::SpentAfterCutoff,
            v: 3,
            q: QueryBody {
                db: vec!["c"],
                aggregate,
                limit,
            },
        }
    }

    /// Outputs of `token` created at or below `cutoff` whose spend is still
    /// sitting in the mempool. Also live as of any confirmed cutoff.
    pub fn spent_in_mempool(token: &TokenId, cutoff: BlockHeight, limit: u64) -> Self {
        let mut aggregate = txo_graph_stages(token, cutoff);
        aggregate.extend([
            json!({ "$lookup": {
                "from": "unconfirmed",
                "localField": "txo.spendTxid",
                "foreignField": "tx.h",
                "as": "u",
            }}),
            json!({ "$unwind": "$u" }),
            json!({ "$project": {
                "spendTxid": "$txo.spendTxid",
                "slpAmount": "$txo.slpAmount",
                "address": "$txo.address",
                "vout": "$txo.vout",
                "txid": 1,
                "blk": 1,
            }}),
        ]);
        Self {
            kind: QueryKind::SpentInMempool,
            v: 3,
            q: QueryBody {
                db: vec!["c"],
                aggregate,
                limit,
            },
        }
    }

    /// The indexer's best indexed height, read from its status collection.
    pub fn indexed_height() -> Self {
        Self {
            kind: QueryKind::IndexedHeight,
            v: 3,
            q: QueryBody {
                db: vec!["s"],
                aggregate: vec![
                    json!({ "$match": {} }),
                    json!({ "$project": { "_id": 0, "blk": "$bchBlockHeight" } }),
                ],
                limit: 1,
            },
        }
    }

    /// Tokens whose genesis document hash (`out.b7`, base64 in the indexer)
    /// matches, optionally narrowed by ticker (`out.b4`).
    ///
    /// Searches confirmed and unconfirmed transactions and joins the token
    /// collection for full genesis details.
    pub fn tokens_by_doc_hash(
        doc_hash_b64: &str,
        ticker: Option<&str>,
        min_height: BlockHeight,
        limit: u64,
    ) -> Self {
        let elem_match = match ticker {
            Some(ticker) => json!({ "$elemMatch": { "b7": doc_hash_b64, "b4": ticker } }),
            None => json!({ "$elemMatch": { "b7": doc_hash_b64 } }),
        };
        Self {
            kind: QueryKind::DocHashSearch,
            v: 3,
            q: QueryBody {
                db: vec!["c", "u"],
                aggregate: vec![
                    json!({ "$match": {
                        "out": elem_match,
                        "blk.i": { "$gte": min_height },
                    }}),
                    json!({ "$project": { "tokenId": "$slp.detail.tokenIdHex" }}),
                    json!({ "$lookup": {
                        "from": "tokens",
                        "localField": "tokenId",
                        "foreignField": "tokenDetails.tokenIdHex",
                        "as": "token",
                    }}),
                    json!({ "$unwind": "$token" }),
                    json!({ "$project": {
                        "_id": 0,
                        "stats": "$token.tokenStats",
                        "token": "$token.tokenDetails",
                    }}),
                ],
                limit,
            },
        }
    }

    /// NFTs minted under `group`, created at or above `min_height`.
    pub fn nfts_in_group(group: &TokenId, min_height: BlockHeight, limit: u64) -> Self {
        Self {
            kind: QueryKind::GroupSearch,
            v: 3,
            q: QueryBody {
                db: vec!["t"],
                aggregate: vec![
                    json!({ "$match": {
                        "nftParentId": group.as_str(),
                        "tokenStats.block_created": { "$gte": min_height },
                    }}),
                    json!({ "$project": {
                        "_id": 0,
                        "stats": "$tokenStats",
                        "token": "$tokenDetails",
                    }}),
                ],
                limit,
            },
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Serialize and base64 encode for the `/q/<encoded>` path segment.
    pub fn encode(&self) -> Result<String, QueryError> {
        let bytes =
            serde_json::to_vec(self).map_err(|e| QueryError::encode_failed(self.kind, e))?;
        Ok(BASE64.encode(bytes))
    }
}
