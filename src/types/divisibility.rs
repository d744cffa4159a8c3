//! Token divisibility type

use serde::{Deserialize, Serialize};

/// SLP token divisibility (number of decimal places)
///
/// SLP genesis metadata constrains divisibility to 0 through 9 decimal
/// places, unlike account-model tokens which commonly use 18. Display
/// formatting and distribution truncation are both relative to this value.
///
/// # Examples
///
/// ```
/// use slpscan::TokenDivisibility;
///
/// let spice = TokenDivisibility::new(8).unwrap();
/// assert_eq!(spice.as_u8(), 8);
///
/// assert!(TokenDivisibility::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TokenDivisibility(u8);

/// Error returned for divisibility values outside the SLP range.
#[derive(Debug, Clone, thiserror::Error)]
#[error("token divisibility {0} is outside the SLP range 0-9")]
pub struct InvalidDivisibility(pub u8);

impl TokenDivisibility {
    /// Maximum divisibility allowed by the SLP token type 1 genesis format
    pub const MAX: u8 = 9;

    /// Whole-unit tokens (no decimal places)
    pub const NONE: Self = Self(0);

    /// Create a new divisibility value, validating the SLP range
    pub const fn new(decimals: u8) -> Result<Self, InvalidDivisibility> {
        if decimals <= Self::MAX {
            Ok(Self(decimals))
        } else {
            Err(InvalidDivisibility(decimals))
        }
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Scale argument for decimal truncation: fractional digits kept
    pub const fn as_scale(&self) -> i64 {
        self.0 as i64
    }
}

impl TryFrom<u8> for TokenDivisibility {
    type Error = InvalidDivisibility;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TokenDivisibility> for u8 {
    fn from(value: TokenDivisibility) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenDivisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisibility_range() {
        assert!(TokenDivisibility::new(0).is_ok());
        assert!(TokenDivisibility::new(9).is_ok());
        assert!(TokenDivisibility::new(10).is_err());
        assert!(TokenDivisibility::new(255).is_err());
    }

    #[test]
    fn test_divisibility_scale() {
        assert_eq!(TokenDivisibility::new(8).unwrap().as_scale(), 8);
        assert_eq!(TokenDivisibility::NONE.as_scale(), 0);
    }

    #[test]
    fn test_display_formatting() {
        let divisibility = TokenDivisibility::new(8).unwrap();
        assert_eq!(format!("{}", divisibility), "8 decimals");
    }

    #[test]
    fn test_serialization_rejects_out_of_range() {
        let ok: TokenDivisibility = serde_json::from_str("9").unwrap();
        assert_eq!(ok.as_u8(), 9);

        let err = serde_json::from_str::<TokenDivisibility>("10");
        assert!(err.is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let divisibility = TokenDivisibility::new(6).unwrap();
        let json = serde_json::to_string(&divisibility).unwrap();
        assert_eq!(json, "6");
        let back: TokenDivisibility = serde_json::from_str(&json).unwrap();
        assert_eq!(divisibility, back);
    }
}
