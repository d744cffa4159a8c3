// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Holder snapshot reconstruction as of a historical height
//!
//! This module answers "who held this token at height H" from a live
//! indexer that only stores the current UTXO state. The trick is that past
//! balances can still be recovered from the spend graph: an output was a
//! live balance at the cutoff height if it was created at or below the
//! cutoff and either never spent, spent strictly above the cutoff, or its
//! spend has not confirmed at all.
//!
//! [`SnapshotCalculator`] issues one query per category, concatenates the
//! results in category order, and hands the set to the pure transforms in
//! [`balances`] for age annotation and per-address aggregation.
//!
//! # Examples
//!
//! ```rust,ignore
//! use slpscan::{HttpQueryClient, SnapshotCalculator, TokenId};
//!
//! let client = HttpQueryClient::new("https://slpdb.fountainhead.cash")?;
//! let calculator = SnapshotCalculator::new(client);
//!
//! let token: TokenId =
//!     "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf".parse()?;
//! let balances = calculator.address_balances(&token, 620_971).await?;
//!
//! for (address, amount) in balances.iter() {
//!     println!("{address}: {amount}");
//! }
//! ```

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::{DuplicatePolicy, SlpscanConfig};
use crate::errors::{QueryError, SnapshotError};
use crate::query::{QueryClient, QueryDocument};
use crate::tracing::spans;
use crate::types::balances::BalanceMap;
use crate::types::records::{BlockHeight, TxoRecord};
use crate::types::token_id::TokenId;

pub mod balances;

pub use balances::{aggregate_balances, annotate_coin_age};

/// Reconstructs token holder state as of a historical block height.
///
/// The calculator is generic over [`QueryClient`], so production code runs
/// it against [`HttpQueryClient`](crate::query::HttpQueryClient) while
/// tests feed it canned responses.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{HttpQueryClient, SlpscanConfig, SnapshotCalculator};
///
/// // Default behavior: duplicate outpoints across categories are logged
/// let calculator = SnapshotCalculator::new(client);
///
/// // Strict behavior: duplicates fail the snapshot
/// let calculator = SnapshotCalculator::with_config(client, SlpscanConfig::strict());
/// ```
pub struct SnapshotCalculator<C> {
    client: C,
    config: SlpscanConfig,
}

impl<C: QueryClient> SnapshotCalculator<C> {
    /// Creates a calculator with the default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, SlpscanConfig::default())
    }

    /// Creates a calculator with an explicit configuration.
    ///
    /// The configuration controls the per-query document limit and what
    /// happens when the same outpoint shows up in more than one category.
    pub fn with_config(client: C, config: SlpscanConfig) -> Self {
        Self { client, config }
    }

    /// Fetches one TXO category and decodes its documents.
    async fn fetch_category(
        &self,
        token: &TokenId,
        query: QueryDocument,
    ) -> Result<Vec<TxoRecord>, QueryError> {
        let span = spans::fetch_category(query.kind().name(), token.as_str());
        let _guard = span.enter();

        let response = self.client.execute(&query).await?;
        let records: Vec<TxoRecord> = response.confirmed()?;

        debug!(kind = %query.kind(), count = records.len(), "Fetched TXO category");
        Ok(records)
    }

    /// Collects every output that was a live balance of `token` as of
    /// `cutoff`.
    ///
    /// Three categories make up the set, concatenated in this order:
    ///
    /// 1. Outputs created at or below the cutoff and still unspent
    /// 2. Outputs created at or below the cutoff, spent strictly above it
    /// 3. Outputs created at or below the cutoff whose spend is unconfirmed
    ///
    /// The categories are queried concurrently; the concatenation order is
    /// fixed regardless of which response arrives first, so repeated runs
    /// against the same indexer state produce identical output.
    ///
    /// `age_start` is only validated here (it must not exceed the cutoff);
    /// the age annotation itself happens in [`coin_list`](Self::coin_list).
    /// Pass `0` to leave the age window unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidRange`] before any query is issued
    /// if `age_start > cutoff`, and [`SnapshotError::DuplicateOutpoint`]
    /// if the same outpoint appears twice under
    /// [`DuplicatePolicy::Reject`].
    pub async fn collect_txos(
        &self,
        token: &TokenId,
        cutoff: BlockHeight,
        age_start: BlockHeight,
    ) -> Result<Vec<TxoRecord>, SnapshotError> {
        let span = spans::collect_txos(token.as_str(), cutoff, (age_start > 0).then_some(age_start));
        let _guard = span.enter();

        if age_start > cutoff {
            return Err(SnapshotError::invalid_range(cutoff, age_start));
        }

        let limit = self.config.query_limit;
        let (unspent, spent_confirmed, spent_mempool) = tokio::try_join!(
            self.fetch_category(token, QueryDocument::unspent_at_cutoff(token, cutoff, limit)),
            self.fetch_category(token, QueryDocument::spent_after_cutoff(token, cutoff, limit)),
            self.fetch_category(token, QueryDocument::spent_in_mempool(token, cutoff, limit)),
        )?;

        let mut records = unspent;
        records.extend(spent_confirmed);
        records.extend(spent_mempool);

        self.check_duplicates(&records)?;

        info!(
            token = %token,
            cutoff,
            count = records.len(),
            "Collected TXO set"
        );
        Ok(records)
    }

    /// Produces the full coin list as of `cutoff` with ages annotated.
    ///
    /// This is [`collect_txos`](Self::collect_txos) followed by
    /// [`annotate_coin_age`]; see the latter for how `age_start` bounds
    /// the age window.
    pub async fn coin_list(
        &self,
        token: &TokenId,
        cutoff: BlockHeight,
        age_start: BlockHeight,
    ) -> Result<Vec<TxoRecord>, SnapshotError> {
        let span = spans::coin_list(token.as_str(), cutoff, (age_start > 0).then_some(age_start));
        let _guard = span.enter();

        let records = self.collect_txos(token, cutoff, age_start).await?;
        Ok(annotate_coin_age(records, cutoff, age_start))
    }

    /// Produces per-address balances of `token` as of `cutoff`.
    ///
    /// Balances are exact decimal sums over the collected TXO set, keyed
    /// by address in first-credit order.
    pub async fn address_balances(
        &self,
        token: &TokenId,
        cutoff: BlockHeight,
    ) -> Result<BalanceMap, SnapshotError> {
        let span = spans::address_balances(token.as_str(), cutoff);
        let _guard = span.enter();

        let records = self.collect_txos(token, cutoff, 0).await?;
        let balances = aggregate_balances(&records);

        info!(
            token = %token,
            cutoff,
            holders = balances.len(),
            "Aggregated address balances"
        );
        Ok(balances)
    }

    /// Reads the indexer's best indexed height.
    ///
    /// Useful for picking a safe cutoff: snapshots taken at or below this
    /// height see fully indexed data.
    pub async fn indexed_height(&self) -> Result<BlockHeight, SnapshotError> {
        let span = spans::indexed_height();
        let _guard = span.enter();

        let response = self.client.execute(&QueryDocument::indexed_height()).await?;
        let height = response.indexed_height()?;

        debug!(height, "Read indexer height");
        Ok(height)
    }

    /// Scans the concatenated set for outpoints reported by more than one
    /// category. A healthy indexer never produces these; when one does,
    /// the configured policy decides between logging and failing.
    fn check_duplicates(&self, records: &[TxoRecord]) -> Result<(), SnapshotError> {
        let mut seen: HashSet<(&str, u32)> = HashSet::with_capacity(records.len());
        for record in records {
            let (txid, vout) = record.outpoint();
            if !seen.insert((txid, vout)) {
                match self.config.duplicate_policy {
                    DuplicatePolicy::Warn => {
                        warn!(txid, vout, "Outpoint reported by more than one category");
                    }
                    DuplicatePolicy::Reject => {
                        return Err(SnapshotError::duplicate_outpoint(txid, vout));
                    }
                }
            }
        }
        Ok(())
    }
}
