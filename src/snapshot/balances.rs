// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure transforms over a collected TXO set.
//!
//! Everything network-facing lives in [`SnapshotCalculator`]; the functions
//! here only reshape records it already collected, which keeps the age and
//! aggregation rules trivially testable.
//!
//! [`SnapshotCalculator`]: crate::snapshot::SnapshotCalculator

use crate::types::balances::BalanceMap;
use crate::types::records::{BlockHeight, TxoRecord};

/// Annotate each record with its coin age as of `cutoff`.
///
/// Coin age is the number of blocks the output existed within the observed
/// window. With `age_start == 0` the window is unbounded and age is simply
/// `cutoff - created`. With a nonzero `age_start`, outputs created before
/// the window opened are capped at `cutoff - age_start`, so early holders
/// are not credited for time before the window.
///
/// Records without a creation height (their creating transaction is still
/// unconfirmed) get no age.
pub fn annotate_coin_age(
    records: Vec<TxoRecord>,
    cutoff: BlockHeight,
    age_start: BlockHeight,
) -> Vec<TxoRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.coin_age = record.created_at_height.map(|created| {
                if age_start > 0 && created < age_start {
                    cutoff.saturating_sub(age_start)
                } else {
                    cutoff.saturating_sub(created)
                }
            });
            record
        })
        .collect()
}

/// Fold a TXO set into per-address balances.
///
/// Every record credits its full amount to its address; an address spread
/// over many outputs ends up with their exact decimal sum. Record order is
/// preserved as first-credit order in the resulting map.
pub fn aggregate_balances(records: &[TxoRecord]) -> BalanceMap {
    let mut balances = BalanceMap::new();
    for record in records {
        balances.credit(record.address.clone(), record.amount.clone());
    }
    balances
}
