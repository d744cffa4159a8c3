// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Median-time-past block resolution
//!
//! Token snapshots are taken "as of height H", but callers usually think in
//! wall-clock time. This module maps a target median-time-past to the
//! height where the chain's 11-block median first reached it, by scanning
//! block timestamps backward from the tip.
//!
//! Median time past (MTP) is the median of a block's own timestamp and its
//! 10 predecessors' timestamps. Individual block timestamps are
//! miner-chosen and non-monotonic; the 11-block median is the
//! manipulation-resistant clock consensus rules themselves use, which makes
//! it the right notion of "when" for historical snapshots.
//!
//! # Examples
//!
//! ```rust,ignore
//! use slpscan::{MtpResolver, UnixTimestamp};
//! use tokio_util::sync::CancellationToken;
//!
//! let resolver = MtpResolver::new(node);
//! let cancel = CancellationToken::new();
//!
//! // Height at which chain median time first reached 2020-02-20 00:00 UTC
//! let height = resolver
//!     .resolve_height(UnixTimestamp(1_582_156_800), &cancel)
//!     .await?;
//! ```

use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::constants::MTP_WINDOW;
use crate::config::{Network, SlpscanConfig};
use crate::errors::{NodeError, ResolverError};
use crate::node::LedgerNode;
use crate::tracing::spans;
use crate::types::records::BlockHeight;
use crate::types::timestamp::UnixTimestamp;

/// One scanned block: height plus header timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockInfo {
    height: BlockHeight,
    timestamp: UnixTimestamp,
}

/// Resolves a target median-time-past to a block height.
///
/// The resolver is generic over [`LedgerNode`] and keeps no state between
/// calls; every resolution is a fresh backward scan. Timestamp lookups are
/// prefetched in batches to bound the number of sequential round trips.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{MtpResolver, Network, SlpscanConfig, UnixTimestamp};
///
/// // Mainnet defaults
/// let resolver = MtpResolver::new(node);
///
/// // Testnet floor, larger prefetch batches
/// let resolver = MtpResolver::with_config(node, SlpscanConfig::builder().mtp_prefetch(64).build())
///     .with_floor(Network::Testnet.mtp_floor());
/// ```
pub struct MtpResolver<N> {
    node: N,
    floor: UnixTimestamp,
    prefetch: usize,
}

impl<N: LedgerNode> MtpResolver<N> {
    /// Creates a resolver with the default configuration and the mainnet
    /// median-time floor.
    pub fn new(node: N) -> Self {
        Self::with_config(node, SlpscanConfig::default())
    }

    /// Creates a resolver with an explicit configuration.
    pub fn with_config(node: N, config: SlpscanConfig) -> Self {
        Self {
            node,
            floor: Network::Mainnet.mtp_floor(),
            prefetch: config.mtp_prefetch.max(1),
        }
    }

    /// Sets the lowest median time this resolver will accept as a target.
    ///
    /// Defaults to the mainnet floor; pass
    /// [`Network::Testnet.mtp_floor()`](Network::mtp_floor) when resolving
    /// against testnet, or an earlier bound for a chain-agnostic node.
    pub fn with_floor(mut self, floor: UnixTimestamp) -> Self {
        self.floor = floor;
        self
    }

    /// Sets how many timestamps are fetched per scan batch (minimum 1).
    pub fn with_prefetch(mut self, prefetch: usize) -> Self {
        self.prefetch = prefetch.max(1);
        self
    }

    /// Fetches timestamps for the inclusive height range `[low, high]`,
    /// highest first. Lookups within the batch run concurrently.
    async fn fetch_timestamps(
        &self,
        high: BlockHeight,
        low: BlockHeight,
    ) -> Result<Vec<BlockInfo>, NodeError> {
        let span = spans::prefetch_timestamps(high, low);
        let _guard = span.enter();

        let heights: Vec<BlockHeight> = (low..=high).rev().collect();
        let lookups = heights.iter().map(|&h| self.node.block_timestamp(h));
        let timestamps = try_join_all(lookups).await?;

        Ok(heights
            .into_iter()
            .zip(timestamps)
            .map(|(height, timestamp)| BlockInfo { height, timestamp })
            .collect())
    }

    /// Computes the median time past at `height`.
    ///
    /// This is the median of the timestamps of `height` and its 10
    /// predecessors; blocks near genesis use whatever predecessors exist.
    pub async fn mtp_at(&self, height: BlockHeight) -> Result<UnixTimestamp, ResolverError> {
        let low = height.saturating_sub(MTP_WINDOW as u64 - 1);
        let blocks = self.fetch_timestamps(height, low).await?;
        let mut window: Vec<i64> = blocks.iter().map(|b| b.timestamp.as_i64()).collect();
        Ok(UnixTimestamp(median_timestamp(&mut window)))
    }

    /// Reads the chain tip and computes its median time past.
    ///
    /// The returned median is the upper bound on resolvable targets: a
    /// median time the chain has not reached yet cannot map to any height.
    pub async fn current_mtp(&self) -> Result<(BlockHeight, UnixTimestamp), ResolverError> {
        let tip = self.node.best_height().await?;
        let span = spans::current_mtp(tip);
        let _guard = span.enter();

        let mtp = self.mtp_at(tip).await?;
        debug!(tip, mtp = %mtp, "Computed median time at tip");
        Ok((tip, mtp))
    }

    /// Resolves `target` to the smallest height whose median time past
    /// reached it.
    ///
    /// # Algorithm
    ///
    /// 1. Reject targets outside `[floor, current tip median]` with
    ///    [`ResolverError::OutOfRange`].
    /// 2. Scan backward from the tip in prefetched batches, collecting
    ///    `(height, timestamp)` pairs until the scan reaches genesis or has
    ///    collected 11 blocks whose timestamps are strictly below the
    ///    target. The overshoot guarantees every candidate block still has
    ///    a complete 11-block window below it.
    /// 3. Walk the collected range by ascending height and return the
    ///    first block whose median time past is at or above the target.
    ///
    /// The scan checks `cancel` before every batch and returns
    /// [`ResolverError::Cancelled`] once the token trips; partial scan
    /// state is discarded, never returned.
    ///
    /// # Errors
    ///
    /// [`ResolverError::NotFound`] means no collected block qualified.
    /// With a passing range check this indicates timestamps shifted under
    /// the scan (a reorg mid-resolution); retrying is reasonable.
    pub async fn resolve_height(
        &self,
        target: UnixTimestamp,
        cancel: &CancellationToken,
    ) -> Result<BlockHeight, ResolverError> {
        let span = spans::resolve_height(target.as_i64());
        let _guard = span.enter();

        let (tip, current) = self.current_mtp().await?;
        if target < self.floor || target > current {
            return Err(ResolverError::out_of_range(target, self.floor, current));
        }

        let mut collected: Vec<BlockInfo> = Vec::new();
        let mut below_target = 0usize;
        let mut next_high = tip;

        loop {
            if cancel.is_cancelled() {
                info!(target = %target, scanned = collected.len(), "Resolution cancelled");
                return Err(ResolverError::Cancelled);
            }

            let low = next_high.saturating_sub(self.prefetch as u64 - 1);
            let batch = self.fetch_timestamps(next_high, low).await?;
            for info in batch {
                if info.timestamp < target {
                    below_target += 1;
                }
                collected.push(info);
            }

            if below_target >= MTP_WINDOW || low == 0 {
                break;
            }
            next_high = low - 1;
        }

        // Batches were collected tip-down; walk candidates oldest first
        collected.reverse();

        let target_ts = target.as_i64();
        for (idx, info) in collected.iter().enumerate() {
            let start = idx.saturating_sub(MTP_WINDOW - 1);
            let mut window: Vec<i64> = collected[start..=idx]
                .iter()
                .map(|b| b.timestamp.as_i64())
                .collect();
            if median_timestamp(&mut window) >= target_ts {
                info!(target = %target, height = info.height, "Resolved median time to height");
                return Ok(info.height);
            }
        }

        Err(ResolverError::NotFound { target })
    }
}

/// Median of `window`, which must not be empty. Sorts in place; for an
/// even count the two central values are averaged.
fn median_timestamp(window: &mut [i64]) -> i64 {
    window.sort_unstable();
    let mid = window.len() / 2;
    if window.len() % 2 == 1 {
        window[mid]
    } else {
        (window[mid - 1] + window[mid]) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_odd_window() {
        let mut window = [1_583, 1_580, 1_586];
        assert_eq!(median_timestamp(&mut window), 1_583);
    }

    #[test]
    fn test_median_of_even_window_averages() {
        let mut window = [10, 40, 20, 30];
        assert_eq!(median_timestamp(&mut window), 25);
    }

    #[test]
    fn test_median_of_full_window_ignores_order() {
        // A miner-skewed timestamp in the middle must not shift the median
        let mut window = [1000, 1010, 1020, 1030, 1040, 9999, 1060, 1070, 1080, 1090, 1100];
        assert_eq!(median_timestamp(&mut window), 1060);
    }

    #[test]
    fn test_median_of_single_block() {
        let mut window = [42];
        assert_eq!(median_timestamp(&mut window), 42);
    }
}
