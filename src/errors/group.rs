//! Error types for NFT group consistency checks.

/// Errors that can occur while building an NFT holder map.
///
/// A group's holder map must assign each NFT to exactly one address.
/// Observing the same NFT id with two different addresses indicates an
/// upstream double mint or a corrupted source list, so it always fails
/// rather than letting either address win silently.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    /// One NFT id mapped to two different holder addresses.
    #[error("NFT {token_id} claimed by both {first} and {second}")]
    DuplicateHolder {
        /// The NFT token id seen twice
        token_id: String,
        /// Address recorded first
        first: String,
        /// Conflicting address observed later
        second: String,
    },
}

impl GroupError {
    /// Create a `DuplicateHolder` error for a conflicting assignment.
    pub fn duplicate_holder(
        token_id: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        GroupError::DuplicateHolder {
            token_id: token_id.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
