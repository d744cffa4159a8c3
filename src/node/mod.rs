// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Ledger node access for block metadata
//!
//! The median-time resolver only needs two facts from a node: the current
//! best height and the timestamp of an arbitrary block. [`LedgerNode`]
//! captures exactly that, so [`MtpResolver`](crate::resolver::MtpResolver)
//! runs unchanged against a full node RPC client, an indexer-backed
//! adapter, or an in-memory chain in tests.
//!
//! # Implementing a backend
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use slpscan::{BlockHeight, LedgerNode, NodeError, UnixTimestamp};
//!
//! struct RpcNode { /* ... */ }
//!
//! #[async_trait]
//! impl LedgerNode for RpcNode {
//!     async fn best_height(&self) -> Result<BlockHeight, NodeError> {
//!         // getblockcount
//!         # unimplemented!()
//!     }
//!
//!     async fn block_timestamp(&self, height: BlockHeight) -> Result<UnixTimestamp, NodeError> {
//!         // getblockheader(getblockhash(height)).time
//!         # unimplemented!()
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::errors::NodeError;
use crate::types::records::BlockHeight;
use crate::types::timestamp::UnixTimestamp;

/// Capability for reading block metadata from the ledger.
///
/// Implementations are expected to be cheap to call repeatedly; the
/// resolver batches its timestamp lookups but issues many of them.
#[async_trait]
pub trait LedgerNode: Send + Sync {
    /// The current best block height.
    async fn best_height(&self) -> Result<BlockHeight, NodeError>;

    /// The timestamp recorded in the header of the block at `height`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::BlockNotFound`] when `height` exceeds the
    /// chain tip, which can happen mid-scan if the node reorganizes.
    async fn block_timestamp(&self, height: BlockHeight) -> Result<UnixTimestamp, NodeError>;
}
