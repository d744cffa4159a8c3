//! Error types for median-time-past height resolution.
//!
//! This module provides error types for operations in the `resolver` module,
//! particularly the backward timestamp scan that maps a target median time
//! to a block height.

use super::NodeError;
use crate::types::timestamp::UnixTimestamp;

/// Errors that can occur while resolving a median time to a height.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{MtpResolver, ResolverError};
/// use tokio_util::sync::CancellationToken;
///
/// async fn example() -> Result<(), ResolverError> {
///     let resolver = MtpResolver::new(node);
///     let cancel = CancellationToken::new();
///
///     match resolver.resolve_height(target, &cancel).await {
///         Ok(height) => println!("resolved to height {height}"),
///         Err(ResolverError::OutOfRange { target, floor, current }) => {
///             eprintln!("{target} outside [{floor}, {current}]");
///         }
///         Err(ResolverError::Cancelled) => eprintln!("gave up"),
///         Err(e) => eprintln!("Other error: {e}"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The target median time lies outside the resolvable range.
    ///
    /// Targets below the configured floor predate usable history; targets
    /// above the tip's median time lie in the future. Both are rejected
    /// before any scanning starts.
    #[error("Target median time {target} outside the resolvable range [{floor}, {current}]")]
    OutOfRange {
        /// The requested median time
        target: UnixTimestamp,
        /// Lowest resolvable median time
        floor: UnixTimestamp,
        /// Median time at the current chain tip
        current: UnixTimestamp,
    },

    /// No scanned block reached the target median time.
    ///
    /// Should not occur once the range check passed, but a reorganization
    /// between the check and the scan can produce it.
    #[error("No block reaches median time {target}")]
    NotFound {
        /// The requested median time
        target: UnixTimestamp,
    },

    /// The scan was cancelled before completing.
    ///
    /// Partial results are discarded, never returned.
    #[error("Height resolution cancelled")]
    Cancelled,

    /// The ledger node failed while serving the scan.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),
}

impl ResolverError {
    /// Create an `OutOfRange` error for a rejected target.
    pub fn out_of_range(
        target: UnixTimestamp,
        floor: UnixTimestamp,
        current: UnixTimestamp,
    ) -> Self {
        ResolverError::OutOfRange {
            target,
            floor,
            current,
        }
    }
}
