//! Error types for holder snapshot collection.
//!
//! This module provides error types for operations in the `snapshot` module,
//! particularly TXO collection and balance aggregation as of a cutoff height.

use super::QueryError;

/// Errors that can occur while building a holder snapshot.
///
/// This error type covers request validation (the coin age window must not
/// start above the cutoff), duplicate outpoints surfacing across query
/// categories under the strict policy, and failures of the underlying
/// indexer queries.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{SnapshotCalculator, SnapshotError};
///
/// async fn example() -> Result<(), SnapshotError> {
///     let calculator = SnapshotCalculator::new(client);
///
///     match calculator.coin_list(&token, 620_971, 620_960).await {
///         Ok(coins) => println!("{} coins", coins.len()),
///         Err(SnapshotError::InvalidRange { cutoff, age_start }) => {
///             eprintln!("age window starts at {age_start}, past cutoff {cutoff}");
///         }
///         Err(e) => eprintln!("Other error: {e}"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The coin age window starts above the snapshot cutoff.
    ///
    /// Detected before any query is issued; a snapshot request with an
    /// inverted window never touches the network.
    #[error("Invalid snapshot range: coin age start {age_start} is above cutoff height {cutoff}")]
    InvalidRange {
        /// The requested cutoff height
        cutoff: u64,
        /// The requested coin age window start
        age_start: u64,
    },

    /// The same outpoint appeared in more than one query category.
    ///
    /// Only raised under [`DuplicatePolicy::Reject`]; the default policy
    /// keeps the records and logs a warning instead.
    ///
    /// [`DuplicatePolicy::Reject`]: crate::config::DuplicatePolicy::Reject
    #[error("Duplicate outpoint {txid}:{vout} across TXO categories")]
    DuplicateOutpoint {
        /// Transaction id of the duplicated output
        txid: String,
        /// Output index of the duplicated output
        vout: u32,
    },

    /// An underlying indexer query failed.
    ///
    /// Any category query failing fails the whole snapshot; partial
    /// snapshots are never returned.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

impl SnapshotError {
    /// Create an `InvalidRange` error for a cutoff/age-start pair.
    pub fn invalid_range(cutoff: u64, age_start: u64) -> Self {
        SnapshotError::InvalidRange { cutoff, age_start }
    }

    /// Create a `DuplicateOutpoint` error for an offending outpoint.
    pub fn duplicate_outpoint(txid: impl Into<String>, vout: u32) -> Self {
        SnapshotError::DuplicateOutpoint {
            txid: txid.into(),
            vout,
        }
    }
}
