//! Validated SLP token identifier

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// SLP token identifier: the 32-byte genesis transaction hash, hex encoded
///
/// Construction validates shape only (64 hex characters). Whether a token
/// with this id actually exists is a question for the indexer.
///
/// # Examples
///
/// ```
/// use slpscan::TokenId;
///
/// let spice = "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf"
///     .parse::<TokenId>()
///     .unwrap();
/// assert_eq!(spice.as_str().len(), 64);
///
/// assert!("not-hex".parse::<TokenId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId(String);

/// Error returned for malformed token identifiers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid token id {value:?}: {reason}")]
pub struct InvalidTokenId {
    /// The rejected input
    pub value: String,
    /// Why the input was rejected
    pub reason: String,
}

impl TokenId {
    /// Create a token id, validating the 64-hex-character shape
    pub fn new(hex_id: impl Into<String>) -> Result<Self, InvalidTokenId> {
        let value = hex_id.into();
        if value.len() != 64 {
            return Err(InvalidTokenId {
                reason: format!("expected 64 hex characters, got {}", value.len()),
                value,
            });
        }
        if hex::decode(&value).is_err() {
            return Err(InvalidTokenId {
                reason: "not a hex string".to_string(),
                value,
            });
        }
        Ok(Self(value))
    }

    /// The hex form used in indexer queries
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenId {
    type Err = InvalidTokenId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TokenId {
    type Error = InvalidTokenId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TokenId> for String {
    fn from(value: TokenId) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
