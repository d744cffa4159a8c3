// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the pure snapshot transforms
//!
//! These tests use proptest to validate invariants of balance aggregation,
//! coin age annotation, and amount truncation across a wide range of
//! generated TXO sets.

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use slpscan::{
    aggregate_balances, annotate_coin_age, TokenAmount, TokenDivisibility, TxoRecord,
};

// Helper to generate addresses from a small pool so repeat credits occur
fn arb_address() -> impl Strategy<Value = String> {
    (0usize..6).prop_map(|i| format!("simpleledger:holder{i}"))
}

// Helper to generate amounts with up to 8 fractional digits
fn arb_amount() -> impl Strategy<Value = TokenAmount> {
    (0u64..=10_000_000_000).prop_map(|raw| {
        format!("{}.{:08}", raw / 100_000_000, raw % 100_000_000)
            .parse()
            .unwrap()
    })
}

fn arb_record() -> impl Strategy<Value = TxoRecord> {
    (
        any::<u8>(),
        0u32..4,
        arb_address(),
        arb_amount(),
        proptest::option::of(600_000u64..700_000),
    )
        .prop_map(|(seed, vout, address, amount, created)| TxoRecord {
            txid: format!("{seed:02x}").repeat(32),
            address,
            amount,
            vout,
            created_at_height: created,
            spend_txid: None,
            spent_at_height: None,
            coin_age: None,
        })
}

fn arb_records() -> impl Strategy<Value = Vec<TxoRecord>> {
    proptest::collection::vec(arb_record(), 0..32)
}

fn arb_divisibility() -> impl Strategy<Value = TokenDivisibility> {
    (0u8..=TokenDivisibility::MAX).prop_map(|d| TokenDivisibility::new(d).unwrap())
}

proptest! {
    /// Property: the aggregate total equals the exact sum of record amounts
    #[test]
    fn prop_aggregation_conserves_total(records in arb_records()) {
        let expected = records
            .iter()
            .fold(TokenAmount::zero(), |total, record| total + record.amount.clone());

        prop_assert_eq!(
            aggregate_balances(&records).total(),
            expected,
            "aggregation must conserve the summed amount"
        );
    }

    /// Property: per-address balances do not depend on record order
    #[test]
    fn prop_aggregation_ignores_record_order(
        (records, shuffled) in arb_records().prop_flat_map(|records| {
            let shuffled = Just(records.clone()).prop_shuffle();
            (Just(records), shuffled)
        }),
    ) {
        let balances = aggregate_balances(&records);
        let reordered = aggregate_balances(&shuffled);

        prop_assert_eq!(balances.len(), reordered.len());
        for (address, amount) in balances.iter() {
            prop_assert_eq!(
                reordered.get(address),
                Some(amount),
                "balance for {} must not depend on record order",
                address
            );
        }
    }

    /// Property: concatenating two TXO sets adds their totals exactly
    #[test]
    fn prop_aggregation_is_additive(a in arb_records(), b in arb_records()) {
        let mut combined = a.clone();
        combined.extend(b.iter().cloned());

        prop_assert_eq!(
            aggregate_balances(&combined).total(),
            aggregate_balances(&a).total() + aggregate_balances(&b).total(),
            "splitting a TXO set must not change the total"
        );
    }

    /// Property: every record's address appears in the aggregate
    #[test]
    fn prop_every_address_is_credited(records in arb_records()) {
        let balances = aggregate_balances(&records);

        prop_assert!(balances.len() <= records.len());
        for record in &records {
            prop_assert!(
                balances.get(&record.address).is_some(),
                "address {} lost during aggregation",
                record.address
            );
        }
    }
}

proptest! {
    /// Property: age measures from the later of creation and window start
    #[test]
    fn prop_age_measures_from_window_start(
        records in arb_records(),
        cutoff in 600_000u64..700_000,
        age_start in 600_000u64..700_000,
    ) {
        let annotated = annotate_coin_age(records, cutoff, age_start);

        for record in &annotated {
            match (record.created_at_height, record.coin_age) {
                (None, age) => prop_assert_eq!(age, None, "unconfirmed outputs have no age"),
                (Some(_), None) => prop_assert!(false, "confirmed outputs must be aged"),
                (Some(created), Some(age)) => prop_assert_eq!(
                    age,
                    cutoff.saturating_sub(created.max(age_start)),
                    "age must measure from the later of creation and window start"
                ),
            }
        }
    }

    /// Property: annotation only fills ages, never reshapes the record set
    #[test]
    fn prop_annotation_preserves_records(
        records in arb_records(),
        cutoff in 600_000u64..700_000,
    ) {
        let annotated = annotate_coin_age(records.clone(), cutoff, 0);

        prop_assert_eq!(annotated.len(), records.len());
        for (before, after) in records.iter().zip(&annotated) {
            prop_assert_eq!(&after.txid, &before.txid);
            prop_assert_eq!(after.vout, before.vout);
            prop_assert_eq!(&after.address, &before.address);
            prop_assert_eq!(&after.amount, &before.amount);
            prop_assert_eq!(after.created_at_height, before.created_at_height);
        }
    }
}

proptest! {
    /// Property: truncation toward zero never increases an amount
    #[test]
    fn prop_truncation_never_rounds_up(
        amount in arb_amount(),
        divisibility in arb_divisibility(),
    ) {
        prop_assert!(
            amount.truncate(divisibility) <= amount,
            "truncation must never round up"
        );
    }

    /// Property: truncation is idempotent
    #[test]
    fn prop_truncation_is_idempotent(
        amount in arb_amount(),
        divisibility in arb_divisibility(),
    ) {
        let once = amount.truncate(divisibility);
        let twice = once.truncate(divisibility);
        prop_assert_eq!(once, twice);
    }

    /// Property: a set of truncated shares never exceeds the untruncated total
    #[test]
    fn prop_truncated_shares_bounded_by_total(
        amounts in proptest::collection::vec(arb_amount(), 0..16),
        divisibility in arb_divisibility(),
    ) {
        let total = amounts
            .iter()
            .fold(TokenAmount::zero(), |sum, amount| sum + amount.clone());
        let truncated_total = amounts
            .iter()
            .fold(TokenAmount::zero(), |sum, amount| sum + amount.truncate(divisibility));

        prop_assert!(
            truncated_total <= total,
            "share truncation must never mint tokens"
        );
    }
}

// Additional unit tests for edge cases not covered by property tests

#[test]
fn test_pro_rata_shares_leave_dust_behind() {
    // 10 whole-unit tokens split across 3 equal holders: 3 each, 1 left over
    let pool: TokenAmount = "10".parse().unwrap();
    let share = TokenAmount::new(pool.as_decimal() / BigDecimal::from(3));
    let truncated = share.truncate(TokenDivisibility::NONE);

    assert_eq!(truncated, "3".parse().unwrap());
    let distributed = truncated.clone() + truncated.clone() + truncated;
    assert!(distributed < pool);
}

#[test]
fn test_aggregation_keeps_zero_value_outputs() {
    let record = TxoRecord {
        txid: "cd".repeat(32),
        address: "simpleledger:holder0".to_string(),
        amount: TokenAmount::zero(),
        vout: 1,
        created_at_height: Some(620_000),
        spend_txid: None,
        spent_at_height: None,
        coin_age: None,
    };

    let balances = aggregate_balances(&[record]);
    assert_eq!(balances.len(), 1);
    assert_eq!(balances.positive_count(), 0);
}
