// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across slpscan.
//!
//! This module provides newtype wrappers for the domain concepts:
//! - Exact-decimal token amounts and SLP divisibility
//! - Validated token identifiers
//! - TXO records as projected by the indexer
//! - Insertion-ordered balance snapshots
//! - Block heights and Unix timestamps

pub mod amount;
pub mod balances;
pub mod divisibility;
pub mod records;
pub mod timestamp;
pub mod token_id;

// Note: Public types are re-exported from lib.rs, not here
