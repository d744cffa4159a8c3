// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! TXO records returned by the holder snapshot queries

use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;

/// Block height on the ledger
pub type BlockHeight = u64;

/// A single token output observed by the snapshot queries
///
/// Field names mirror the indexer's projection keys so documents decode
/// directly. The three query categories share this shape: unspent outputs
/// carry neither spend field, outputs spent after the cutoff carry both,
/// and outputs whose spend still sits in the mempool carry `spend_txid`
/// without `spent_at_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxoRecord {
    /// Transaction that created this output
    pub txid: String,

    /// Holder address as reported by the indexer (format-agnostic)
    pub address: String,

    /// Exact token quantity carried by the output
    #[serde(rename = "slpAmount")]
    pub amount: TokenAmount,

    /// Output index within the creating transaction
    pub vout: u32,

    /// Height of the block containing the creating transaction, if confirmed
    #[serde(rename = "blk", default, skip_serializing_if = "Option::is_none")]
    pub created_at_height: Option<BlockHeight>,

    /// Transaction that spent this output, when a spend is known
    #[serde(rename = "spendTxid", default, skip_serializing_if = "Option::is_none")]
    pub spend_txid: Option<String>,

    /// Height at which the spend confirmed; `None` while it is unconfirmed
    #[serde(
        rename = "spentAtBlock",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub spent_at_height: Option<BlockHeight>,

    /// Blocks elapsed since creation, capped at the coin age window start
    #[serde(rename = "coinAge", default, skip_serializing_if = "Option::is_none")]
    pub coin_age: Option<u64>,
}

impl TxoRecord {
    /// Outpoint identity of this record, used for duplicate detection
    pub fn outpoint(&self) -> (&str, u32) {
        (self.txid.as_str(), self.vout)
    }
}
