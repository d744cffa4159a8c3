//! Shared error types for ledger node operations.
//!
//! This module provides error types for failures at the [`LedgerNode`]
//! boundary, the caller-supplied capability the resolver uses to read chain
//! tip and block timestamps.
//!
//! [`LedgerNode`]: crate::node::LedgerNode

/// Errors that can occur when reading from a ledger node.
///
/// Implementations of the node capability map their transport failures into
/// these variants so the resolver can report what it was doing when the
/// node stopped answering.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// Failed to fetch the current best block height.
    #[error("Failed to get best block height")]
    BestHeightFailed {
        /// The underlying node error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch the timestamp of a specific block.
    ///
    /// This indicates the call itself failed, not that the block is absent.
    #[error("Failed to fetch timestamp for block {height}")]
    TimestampFailed {
        /// The block height being fetched
        height: u64,
        /// The underlying node error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node reports no block at the given height.
    ///
    /// This can occur if the height is beyond the chain tip or after a
    /// reorganization shortened the chain mid-scan.
    #[error("Block not found: {height}")]
    BlockNotFound {
        /// The height that wasn't found
        height: u64,
    },
}

impl NodeError {
    /// Helper to create a `BestHeightFailed` error from any error type.
    pub fn best_height_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        NodeError::BestHeightFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `TimestampFailed` error from any error type.
    pub fn timestamp_failed(
        height: u64,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NodeError::TimestampFailed {
            height,
            source: Box::new(source),
        }
    }
}
