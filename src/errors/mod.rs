//! Error types for the slpscan library.
//!
//! This module provides strongly-typed errors for all public APIs in slpscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`SnapshotError`, `ResolverError`, etc.)
//! - **Unified error type** (`SlpscanError`) for convenience when you don't
//!   need to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`SnapshotError`] - Errors from holder snapshot collection
//! - [`ResolverError`] - Errors from median-time-past height resolution
//! - [`GroupError`] - Errors from NFT group consistency checks
//! - [`DiscoveryError`] - Errors from token discovery searches
//!
//! Additionally, [`QueryError`] provides shared error variants for indexer
//! query transport, and [`NodeError`] for the ledger node boundary.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use slpscan::{SnapshotCalculator, SnapshotError};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let calculator = SnapshotCalculator::new(client);
//!
//!     match calculator.address_balances(&token, 620_971).await {
//!         Ok(balances) => println!("{} holders", balances.len()),
//!         Err(SnapshotError::InvalidRange { cutoff, age_start }) => {
//!             eprintln!("bad window: {age_start} > {cutoff}");
//!         }
//!         Err(SnapshotError::Query(e)) => {
//!             eprintln!("indexer failure: {e}");
//!         }
//!         Err(e) => eprintln!("Other error: {e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use slpscan::{SlpscanError, MtpResolver, SnapshotCalculator};
//!
//! async fn example() -> Result<(), SlpscanError> {
//!     let height = resolver.resolve_height(target, &cancel).await?;
//!     let balances = calculator.address_balances(&token, height).await?;
//!     // Errors automatically convert to SlpscanError via From implementations
//!     Ok(())
//! }
//! ```

mod discovery;
mod group;
mod node;
mod query;
mod resolver;
mod snapshot;

pub use discovery::DiscoveryError;
pub use group::GroupError;
pub use node::NodeError;
pub use query::QueryError;
pub use resolver::ResolverError;
pub use snapshot::SnapshotError;

/// Unified error type for all slpscan operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between different
/// error sources.
///
/// All module-specific error types automatically convert to `SlpscanError`
/// via `From` implementations, so you can use `?` to propagate errors
/// naturally.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{SlpscanError, MtpResolver, SnapshotCalculator};
/// use tokio_util::sync::CancellationToken;
///
/// async fn holders_at_time(target: UnixTimestamp) -> Result<BalanceMap, SlpscanError> {
///     let cancel = CancellationToken::new();
///     // Both error types automatically convert to SlpscanError
///     let height = resolver.resolve_height(target, &cancel).await?;
///     let balances = calculator.address_balances(&token, height).await?;
///     Ok(balances)
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SlpscanError {
    /// Error from holder snapshot collection.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Error from median-time-past height resolution.
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Error from NFT group consistency checks.
    #[error("Group error: {0}")]
    Group(#[from] GroupError),

    /// Error from token discovery searches.
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}
