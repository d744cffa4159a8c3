//! Span creation helpers for slpscan operations.
//!
//! This module provides span creation functions following an orthogonal
//! design pattern where telemetry concerns are separated from business
//! logic. Instead of using `#[instrument]` attributes directly on functions,
//! each instrumented operation has a corresponding span helper function in
//! this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for fetching one TXO category of a snapshot.
///
/// Parent: collect_txos span
/// Children: none (leaf HTTP round trip in the query client)
#[inline]
pub(crate) fn fetch_category(kind: &'static str, token: &str) -> Span {
    tracing::debug_span!("slpscan.fetch_category", kind = kind, token = token,)
}

/// Create span for collecting the full TXO set as of a cutoff height.
///
/// Parent: None, or coin_list / address_balances when called through them
/// Children: fetch_category spans (one per category)
#[inline]
pub(crate) fn collect_txos(token: &str, cutoff: u64, age_start: Option<u64>) -> Span {
    tracing::span!(
        Level::INFO,
        "slpscan.collect_txos",
        token = token,
        cutoff = cutoff,
        age_start = age_start,
    )
}

/// Create span for producing a coin list with ages annotated.
///
/// This is a main public API entry point for snapshot retrieval.
///
/// Parent: None (root span for this operation)
/// Children: collect_txos span
#[inline]
pub(crate) fn coin_list(token: &str, cutoff: u64, age_start: Option<u64>) -> Span {
    tracing::info_span!(
        "slpscan.coin_list",
        token = token,
        cutoff = cutoff,
        age_start = age_start,
    )
}

/// Create span for producing per-address balances as of a cutoff height.
///
/// This is a main public API entry point for snapshot retrieval.
///
/// Parent: None (root span for this operation)
/// Children: collect_txos span
#[inline]
pub(crate) fn address_balances(token: &str, cutoff: u64) -> Span {
    tracing::info_span!("slpscan.address_balances", token = token, cutoff = cutoff,)
}

/// Create span for reading the indexer's best indexed height.
///
/// Parent: None (root span for this operation)
/// Children: none (leaf HTTP round trip in the query client)
#[inline]
pub(crate) fn indexed_height() -> Span {
    tracing::debug_span!("slpscan.indexed_height",)
}

/// Create span for resolving a target median time to a block height.
///
/// This is the main public API for time-based height selection.
///
/// Parent: None (root span for this operation)
/// Children: prefetch_timestamps spans (one per scan batch)
#[inline]
pub(crate) fn resolve_height(target: i64) -> Span {
    tracing::info_span!("slpscan.resolve_height", target = target,)
}

/// Create span for prefetching one descending batch of block timestamps.
///
/// Parent: resolve_height or current_mtp span
/// Children: node timestamp calls
#[inline]
pub(crate) fn prefetch_timestamps(high: u64, low: u64) -> Span {
    tracing::debug_span!("slpscan.prefetch_timestamps", high = high, low = low,)
}

/// Create span for computing the median time at the chain tip.
///
/// Parent: None, or resolve_height when called as its range check
/// Children: prefetch_timestamps span
#[inline]
pub(crate) fn current_mtp(tip: u64) -> Span {
    tracing::debug_span!("slpscan.current_mtp", tip = tip,)
}

/// Create span for searching tokens that reference a document hash.
///
/// Parent: None (root span for this operation)
/// Children: none (leaf HTTP round trip in the query client)
#[inline]
pub(crate) fn tokens_referencing_doc_hash(doc_hash: &str) -> Span {
    tracing::info_span!("slpscan.tokens_referencing_doc_hash", doc_hash = doc_hash,)
}

/// Create span for listing the NFTs minted under a group token.
///
/// Parent: None (root span for this operation)
/// Children: none (leaf HTTP round trip in the query client)
#[inline]
pub(crate) fn nfts_in_group(group: &str) -> Span {
    tracing::info_span!("slpscan.nfts_in_group", group = group,)
}
