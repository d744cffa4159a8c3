//! Protocol constants and well-known network parameters
//!
//! This module centralizes magic numbers and well-known service endpoints
//! used throughout the slpscan crate, improving discoverability and
//! maintainability.

use std::time::Duration;

/// Limit applied to every aggregation query.
///
/// SLPDB rejects unbounded aggregations, so queries carry an explicit limit
/// large enough to never clip a real result set.
pub const MAX_QUERY_LIMIT: u64 = 1_000_000_000;

/// Number of blocks in a median-time-past window.
pub const MTP_WINDOW: usize = 11;

/// Default number of block timestamps the resolver prefetches per batch.
pub const DEFAULT_MTP_PREFETCH: usize = 16;

/// Default timeout applied to indexer HTTP requests.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default indexer endpoint when the caller does not pick one.
pub const DEFAULT_ENDPOINT: &str = "https://nyc1.slpdb.io";

/// Bitcoin Cash mainnet parameters
pub mod mainnet {
    /// First height at which SLP transactions exist on mainnet.
    ///
    /// Snapshots below this height are always empty, so callers treat it
    /// as the minimum usable cutoff.
    pub const MIN_USABLE_HEIGHT: u64 = 543_375;

    /// Median time of the block at [`MIN_USABLE_HEIGHT`].
    ///
    /// Lowest median-time-past the resolver will accept as a target.
    pub const MTP_FLOOR: i64 = 1_534_250_155;

    /// Publicly operated SLPDB endpoints.
    pub const KNOWN_ENDPOINTS: &[&str] = &[
        "https://slpdb.bitcoin.com",
        "https://slpdb.fountainhead.cash",
        "https://slpserve.imaginary.cash",
    ];
}

/// Bitcoin Cash testnet3 parameters
pub mod testnet {
    /// First height at which SLP transactions exist on testnet.
    pub const MIN_USABLE_HEIGHT: u64 = 1_253_801;

    /// Median time of the block at [`MIN_USABLE_HEIGHT`].
    pub const MTP_FLOOR: i64 = 1_535_262_813;

    /// Publicly operated SLPDB endpoints.
    pub const KNOWN_ENDPOINTS: &[&str] = &["https://tslpdb.bitcoin.com"];
}
