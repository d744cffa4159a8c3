// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Historical token analytics for SLP tokens on Bitcoin Cash
//!
//! slpscan reconstructs token holder state "as of" an arbitrary point in
//! the past from a live SLPDB indexer, which only stores present UTXO
//! state. Past balances are recovered from the spend graph; past points in
//! time are mapped to block heights through the chain's own 11-block
//! median-time clock.
//!
//! # Overview
//!
//! - [`SnapshotCalculator`] - per-address balances and coin lists of a
//!   token as of a cutoff height
//! - [`MtpResolver`] - maps a target median-time-past to the height where
//!   the chain first reached it
//! - [`TokenDiscovery`] - finds tokens by genesis document hash or NFT
//!   group membership
//! - [`build_holder_map`] - collapses observed NFT holders into a
//!   one-to-one map, failing loudly on double ownership
//!
//! Network access goes through two small capabilities, [`QueryClient`]
//! for the indexer and [`LedgerNode`] for block metadata, so every
//! calculator runs unchanged against mocks in tests.
//!
//! # Examples
//!
//! ```rust,ignore
//! use slpscan::{HttpQueryClient, SnapshotCalculator, TokenId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpQueryClient::new("https://slpdb.fountainhead.cash")?;
//!     let calculator = SnapshotCalculator::new(client);
//!
//!     let token: TokenId =
//!         "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf".parse()?;
//!     let balances = calculator.address_balances(&token, 620_971).await?;
//!
//!     println!("{} holders at height 620971", balances.positive_count());
//!     for (address, amount) in balances.iter() {
//!         println!("{address},{amount}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Amounts are exact decimals end to end; nothing in this crate ever
//! rounds a token quantity through binary floating point.

pub mod config;
pub mod discovery;
pub mod errors;
pub mod group;
pub mod node;
pub mod query;
pub mod resolver;
pub mod snapshot;
pub mod types;

mod tracing;

pub use config::{DuplicatePolicy, Network, SlpscanConfig, SlpscanConfigBuilder};
pub use discovery::{DocSearchOptions, GenesisInfo, TokenDetails, TokenDiscovery, TokenStats};
pub use errors::{
    DiscoveryError, GroupError, NodeError, QueryError, ResolverError, SlpscanError, SnapshotError,
};
pub use group::{build_holder_map, NftHolderMap, NftHolding};
pub use node::LedgerNode;
pub use query::{HttpQueryClient, QueryClient, QueryDocument, QueryKind, QueryResponse};
pub use resolver::MtpResolver;
pub use snapshot::{aggregate_balances, annotate_coin_age, SnapshotCalculator};
pub use types::amount::TokenAmount;
pub use types::balances::BalanceMap;
pub use types::divisibility::{InvalidDivisibility, TokenDivisibility};
pub use types::records::{BlockHeight, TxoRecord};
pub use types::timestamp::UnixTimestamp;
pub use types::token_id::{InvalidTokenId, TokenId};
