// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token discovery by genesis metadata
//!
//! Protocols built on top of tokens often mark their tokens at genesis:
//! a document hash identifies "tokens published against this document"
//! (chat groups, app releases), and NFT children name their group parent.
//! This module finds such tokens through the indexer's token collections.
//!
//! # Examples
//!
//! ```rust,ignore
//! use slpscan::{DocSearchOptions, HttpQueryClient, TokenDiscovery};
//!
//! let discovery = TokenDiscovery::new(HttpQueryClient::new(endpoint)?);
//!
//! // All tokens whose genesis references a protocol document
//! let tokens = discovery
//!     .tokens_referencing_doc_hash(doc_hash_hex, &DocSearchOptions::default())
//!     .await?;
//!
//! for info in tokens {
//!     println!("{} ({})", info.token.name, info.token.token_id);
//! }
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SlpscanConfig;
use crate::errors::DiscoveryError;
use crate::query::{QueryClient, QueryDocument};
use crate::tracing::spans;
use crate::types::amount::TokenAmount;
use crate::types::divisibility::TokenDivisibility;
use crate::types::records::BlockHeight;
use crate::types::token_id::TokenId;

/// Genesis details of one token, as recorded by the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDetails {
    /// Decimal places amounts of this token may carry
    pub decimals: TokenDivisibility,

    /// The token id
    #[serde(rename = "tokenIdHex")]
    pub token_id: TokenId,

    /// Genesis transaction time as reported by the indexer
    pub timestamp: String,

    /// Genesis transaction unix time; absent while unconfirmed
    #[serde(default)]
    pub timestamp_unix: Option<i64>,

    /// Transaction type at genesis (`GENESIS` or `MINT`)
    #[serde(rename = "transactionType")]
    pub transaction_type: String,

    /// Token protocol version (1 fungible, 65 NFT child, 129 NFT group)
    #[serde(rename = "versionType")]
    pub version_type: u16,

    /// Document URI declared at genesis
    #[serde(rename = "documentUri")]
    pub document_uri: String,

    /// SHA-256 of the genesis document, when one was declared
    #[serde(rename = "documentSha256Hex")]
    pub document_sha256_hex: Option<String>,

    /// Ticker symbol
    pub symbol: String,

    /// Human-readable name
    pub name: String,

    /// Output index of the minting baton, when one exists
    #[serde(rename = "batonVout")]
    pub baton_vout: Option<u32>,

    /// Whether a minting baton exists for this token
    #[serde(rename = "containsBaton")]
    pub contains_baton: bool,

    /// Quantity created by the genesis or mint transaction
    #[serde(rename = "genesisOrMintQuantity")]
    pub genesis_quantity: TokenAmount,
}

/// Aggregate statistics the indexer keeps per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenStats {
    /// Height the token was created at; absent while unconfirmed
    #[serde(default)]
    pub block_created: Option<BlockHeight>,

    /// Approximate transaction count since genesis
    #[serde(default)]
    pub approx_txns_since_genesis: u64,
}

/// One discovered token: genesis details plus indexer statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisInfo {
    pub token: TokenDetails,
    pub stats: TokenStats,
}

/// Options narrowing a document-hash search.
///
/// # Examples
///
/// ```
/// use slpscan::DocSearchOptions;
///
/// let options = DocSearchOptions::new()
///     .with_min_height(620_000)
///     .with_ticker("MAZE");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSearchOptions {
    /// Only consider genesis transactions at or above this height
    pub min_height: BlockHeight,
    /// Require this exact ticker alongside the document hash
    pub ticker: Option<String>,
}

impl DocSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the search to genesis transactions at or above `height`.
    pub fn with_min_height(mut self, height: BlockHeight) -> Self {
        self.min_height = height;
        self
    }

    /// Requires the given ticker alongside the document hash.
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }
}

/// Finds tokens by their genesis metadata.
///
/// Like the snapshot calculator, discovery is generic over
/// [`QueryClient`]; both can share one client instance.
pub struct TokenDiscovery<C> {
    client: C,
    config: SlpscanConfig,
}

impl<C: QueryClient> TokenDiscovery<C> {
    /// Creates a discovery service with the default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, SlpscanConfig::default())
    }

    /// Creates a discovery service with an explicit configuration.
    pub fn with_config(client: C, config: SlpscanConfig) -> Self {
        Self { client, config }
    }

    /// Finds tokens whose genesis document hash matches `doc_hash_hex`.
    ///
    /// The hash is validated as hex before any query is issued; the
    /// indexer stores OP_RETURN pushes base64 encoded, so the encoded form
    /// goes on the wire. Confirmed and unconfirmed genesis transactions
    /// both count, so freshly published tokens are discoverable before
    /// their genesis confirms.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidDocHash`] when `doc_hash_hex` is
    /// not valid hex.
    pub async fn tokens_referencing_doc_hash(
        &self,
        doc_hash_hex: &str,
        options: &DocSearchOptions,
    ) -> Result<Vec<GenesisInfo>, DiscoveryError> {
        let span = spans::tokens_referencing_doc_hash(doc_hash_hex);
        let _guard = span.enter();

        let raw = hex::decode(doc_hash_hex)
            .map_err(|e| DiscoveryError::invalid_doc_hash(doc_hash_hex, format!("{e}")))?;
        let doc_hash_b64 = BASE64.encode(raw);

        let query = QueryDocument::tokens_by_doc_hash(
            &doc_hash_b64,
            options.ticker.as_deref(),
            options.min_height,
            self.config.query_limit,
        );
        let response = self.client.execute(&query).await?;

        let mut tokens: Vec<GenesisInfo> = response.confirmed()?;
        tokens.extend(response.unconfirmed::<GenesisInfo>()?);

        info!(count = tokens.len(), "Found tokens referencing document hash");
        Ok(tokens)
    }

    /// Lists the NFTs minted under `group`, created at or above
    /// `min_height` (pass 0 for the whole chain).
    ///
    /// The listing covers every NFT ever minted in the group, including
    /// burned ones; pair it with
    /// [`build_holder_map`](crate::group::build_holder_map) once holders
    /// of the live NFTs are known.
    pub async fn nfts_in_group(
        &self,
        group: &TokenId,
        min_height: BlockHeight,
    ) -> Result<Vec<GenesisInfo>, DiscoveryError> {
        let span = spans::nfts_in_group(group.as_str());
        let _guard = span.enter();

        let query = QueryDocument::nfts_in_group(group, min_height, self.config.query_limit);
        let response = self.client.execute(&query).await?;
        let nfts: Vec<GenesisInfo> = response.tokens()?;

        info!(group = %group, count = nfts.len(), "Listed NFTs in group");
        Ok(nfts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_indexer_token_document() {
        let doc = json!({
            "token": {
                "decimals": 8,
                "tokenIdHex": "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf",
                "timestamp": "2018-11-15 05:03:07",
                "timestamp_unix": 1_542_258_187,
                "transactionType": "GENESIS",
                "versionType": 1,
                "documentUri": "spiceslp@gmail.com",
                "documentSha256Hex": null,
                "symbol": "SPICE",
                "name": "Spice",
                "batonVout": null,
                "containsBaton": false,
                "genesisOrMintQuantity": "100000000000"
            },
            "stats": {
                "block_created": 556_806,
                "approx_txns_since_genesis": 250_000
            }
        });

        let info: GenesisInfo = serde_json::from_value(doc).unwrap();
        assert_eq!(info.token.symbol, "SPICE");
        assert_eq!(info.token.decimals.as_u8(), 8);
        assert_eq!(info.token.baton_vout, None);
        assert_eq!(info.stats.block_created, Some(556_806));
    }

    #[test]
    fn test_decodes_unconfirmed_token_document() {
        // Unconfirmed genesis: no block height, no unix timestamp yet
        let doc = json!({
            "token": {
                "decimals": 0,
                "tokenIdHex": "ba".repeat(32),
                "timestamp": "unconfirmed",
                "transactionType": "GENESIS",
                "versionType": 65,
                "documentUri": "",
                "documentSha256Hex": "ab".repeat(32),
                "symbol": "NFT",
                "name": "One of many",
                "batonVout": 2,
                "containsBaton": true,
                "genesisOrMintQuantity": "1"
            },
            "stats": {}
        });

        let info: GenesisInfo = serde_json::from_value(doc).unwrap();
        assert_eq!(info.token.timestamp_unix, None);
        assert_eq!(info.token.baton_vout, Some(2));
        assert_eq!(info.stats.block_created, None);
        assert_eq!(info.stats.approx_txns_since_genesis, 0);
    }

    #[test]
    fn test_search_options_compose() {
        let options = DocSearchOptions::new()
            .with_min_height(600_000)
            .with_ticker("MAZE");
        assert_eq!(options.min_height, 600_000);
        assert_eq!(options.ticker.as_deref(), Some("MAZE"));
    }
}
