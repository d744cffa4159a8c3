// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! NFT group holder-map construction
//!
//! An NFT is a singleton: at any moment exactly one address holds it. When
//! a group's per-NFT holders are collected (one unspent output per NFT),
//! the pairs must collapse into a one-to-one map. Seeing the same NFT id
//! with two different addresses means the upstream data double-counts a
//! singleton, and the only safe response is to fail the whole map rather
//! than pick a winner.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::GroupError;
use crate::types::token_id::TokenId;

/// One observed NFT-to-holder assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftHolding {
    /// The NFT child token
    #[serde(rename = "tokenId")]
    pub token_id: TokenId,
    /// Address holding its unspent output
    pub address: String,
}

impl NftHolding {
    pub fn new(token_id: TokenId, address: impl Into<String>) -> Self {
        Self {
            token_id,
            address: address.into(),
        }
    }
}

/// Holder map for an NFT group: each NFT id owned by exactly one address.
///
/// Iteration follows the order NFTs were first observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NftHolderMap(IndexMap<TokenId, String>);

impl NftHolderMap {
    /// Holder of `token_id`, if the NFT is in this group.
    pub fn holder(&self, token_id: &TokenId) -> Option<&str> {
        self.0.get(token_id).map(String::as_str)
    }

    /// Number of NFTs in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate assignments in first-observation order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenId, &str)> {
        self.0.iter().map(|(token_id, address)| (token_id, address.as_str()))
    }
}

impl IntoIterator for NftHolderMap {
    type Item = (TokenId, String);
    type IntoIter = indexmap::map::IntoIter<TokenId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collapse observed holdings into a one-to-one holder map.
///
/// Repeats of the same `(token_id, address)` pair are idempotent. The same
/// NFT with a different address fails with
/// [`GroupError::DuplicateHolder`], keeping both addresses for the report.
///
/// # Examples
///
/// ```rust,ignore
/// use slpscan::{build_holder_map, NftHolding};
///
/// let map = build_holder_map(&holdings)?;
/// for (nft, address) in map.iter() {
///     println!("{nft} held by {address}");
/// }
/// ```
pub fn build_holder_map(holdings: &[NftHolding]) -> Result<NftHolderMap, GroupError> {
    let mut map: IndexMap<TokenId, String> = IndexMap::with_capacity(holdings.len());
    for holding in holdings {
        match map.entry(holding.token_id.clone()) {
            Entry::Occupied(entry) => {
                if entry.get() != &holding.address {
                    return Err(GroupError::duplicate_holder(
                        holding.token_id.as_str(),
                        entry.get().as_str(),
                        holding.address.as_str(),
                    ));
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(holding.address.clone());
            }
        }
    }
    Ok(NftHolderMap(map))
}
