//! Configuration for slpscan operations
//!
//! This module provides a configuration system for controlling query limits,
//! duplicate outpoint handling, request timeouts, and resolver batching.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use slpscan::SlpscanConfig;
//!
//! // Warn on duplicate outpoints, 30s timeout, indexer-scale query limit
//! let config = SlpscanConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use slpscan::{DuplicatePolicy, SlpscanConfigBuilder};
//! use std::time::Duration;
//!
//! let config = SlpscanConfigBuilder::new()
//!     .duplicate_policy(DuplicatePolicy::Reject)
//!     .request_timeout(Duration::from_secs(60))
//!     .mtp_prefetch(32)
//!     .build();
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::records::BlockHeight;
use crate::types::timestamp::UnixTimestamp;

pub mod constants;

use constants::{DEFAULT_MTP_PREFETCH, DEFAULT_REQUEST_TIMEOUT, MAX_QUERY_LIMIT};

/// How the snapshot collector treats an outpoint that appears in more than
/// one query category.
///
/// The three categories are disjoint by construction (an output cannot be
/// both unspent and spent), so a duplicate means the indexer's graph data
/// is inconsistent. Duplicates are never summed silently: the lenient
/// policy keeps both records and logs each collision, the strict policy
/// fails the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep every record and emit a warning per collision (default)
    #[default]
    Warn,
    /// Fail the snapshot on the first collision
    Reject,
}

/// Bitcoin Cash network the snapshot and resolver constants refer to.
///
/// Carries the collaborator-facing parameters of each network: the first
/// height with SLP activity, the matching median-time floor, and the
/// publicly operated indexer endpoints.
///
/// # Examples
///
/// ```rust
/// use slpscan::Network;
///
/// let net = Network::Mainnet;
/// assert_eq!(net.min_usable_height(), 543_375);
/// assert!(!net.known_endpoints().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// First height at which SLP transactions exist on this network
    pub const fn min_usable_height(&self) -> BlockHeight {
        match self {
            Network::Mainnet => constants::mainnet::MIN_USABLE_HEIGHT,
            Network::Testnet => constants::testnet::MIN_USABLE_HEIGHT,
        }
    }

    /// Lowest median-time-past the resolver accepts as a target
    pub const fn mtp_floor(&self) -> UnixTimestamp {
        match self {
            Network::Mainnet => UnixTimestamp(constants::mainnet::MTP_FLOOR),
            Network::Testnet => UnixTimestamp(constants::testnet::MTP_FLOOR),
        }
    }

    /// Publicly operated indexer endpoints for this network
    pub const fn known_endpoints(&self) -> &'static [&'static str] {
        match self {
            Network::Mainnet => constants::mainnet::KNOWN_ENDPOINTS,
            Network::Testnet => constants::testnet::KNOWN_ENDPOINTS,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Configuration for slpscan operations
///
/// Controls query limits, duplicate outpoint handling, request timeouts,
/// and resolver prefetch batching. Use [`SlpscanConfigBuilder`] for a
/// fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct SlpscanConfig {
    /// Limit attached to every aggregation query
    /// Default: 1_000_000_000 (never clips a real result set)
    pub query_limit: u64,

    /// Handling of outpoints duplicated across query categories
    /// Default: `DuplicatePolicy::Warn`
    pub duplicate_policy: DuplicatePolicy,

    /// Timeout for indexer HTTP requests
    /// Default: 30 seconds (prevents hanging on unresponsive indexers)
    pub request_timeout: Duration,

    /// Block timestamps fetched per resolver batch
    /// Default: 16
    pub mtp_prefetch: usize,
}

impl Default for SlpscanConfig {
    fn default() -> Self {
        Self {
            query_limit: MAX_QUERY_LIMIT,
            duplicate_policy: DuplicatePolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            mtp_prefetch: DEFAULT_MTP_PREFETCH,
        }
    }
}

impl SlpscanConfig {
    /// Create a config that fails snapshots on duplicate outpoints
    ///
    /// # Example
    ///
    /// ```rust
    /// use slpscan::{DuplicatePolicy, SlpscanConfig};
    ///
    /// let config = SlpscanConfig::strict();
    /// assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    /// ```
    pub fn strict() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            ..Self::default()
        }
    }
}

/// Builder for [`SlpscanConfig`]
///
/// # Example
///
/// ```rust
/// use slpscan::SlpscanConfigBuilder;
/// use std::time::Duration;
///
/// let config = SlpscanConfigBuilder::new()
///     .request_timeout(Duration::from_secs(60))
///     .mtp_prefetch(32)
///     .build();
/// ```
pub struct SlpscanConfigBuilder {
    config: SlpscanConfig,
}

impl Default for SlpscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SlpscanConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: SlpscanConfig::default(),
        }
    }

    /// Set the limit attached to aggregation queries
    pub fn query_limit(mut self, limit: u64) -> Self {
        self.config.query_limit = limit;
        self
    }

    /// Set the duplicate outpoint policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Convenience: fail snapshots on duplicate outpoints
    pub fn reject_duplicates(self) -> Self {
        self.duplicate_policy(DuplicatePolicy::Reject)
    }

    /// Set the indexer request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the resolver's per-batch timestamp prefetch count
    ///
    /// Values below 1 are treated as 1.
    pub fn mtp_prefetch(mut self, prefetch: usize) -> Self {
        self.config.mtp_prefetch = prefetch.max(1);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SlpscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlpscanConfig::default();
        assert_eq!(config.query_limit, MAX_QUERY_LIMIT);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Warn);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.mtp_prefetch, DEFAULT_MTP_PREFETCH);
    }

    #[test]
    fn test_strict_config() {
        let config = SlpscanConfig::strict();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        // Everything else stays at defaults
        assert_eq!(config.query_limit, MAX_QUERY_LIMIT);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SlpscanConfigBuilder::new()
            .query_limit(500)
            .reject_duplicates()
            .request_timeout(Duration::from_secs(5))
            .mtp_prefetch(4)
            .build();

        assert_eq!(config.query_limit, 500);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.mtp_prefetch, 4);
    }

    #[test]
    fn test_prefetch_floor() {
        let config = SlpscanConfigBuilder::new().mtp_prefetch(0).build();
        assert_eq!(config.mtp_prefetch, 1);
    }

    #[test]
    fn test_network_parameters() {
        assert_eq!(Network::Mainnet.min_usable_height(), 543_375);
        assert_eq!(Network::Testnet.min_usable_height(), 1_253_801);
        assert!(Network::Mainnet.mtp_floor() < Network::Testnet.mtp_floor());
        assert_eq!(format!("{}", Network::Mainnet), "mainnet");
    }
}
