// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Exact-decimal token amount type

use std::ops::{Add, AddAssign};
use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, Zero};
use serde::{Deserialize, Serialize};

use super::divisibility::TokenDivisibility;

/// Exact decimal token amount
///
/// Token quantities travel as arbitrary-precision decimals end to end. The
/// indexer reports per-output amounts as decimal strings and holder balances
/// must sum exactly, so binary floating point is never used anywhere on the
/// amount path.
///
/// # Examples
///
/// ```
/// use slpscan::TokenAmount;
///
/// let a: TokenAmount = "0.1".parse().unwrap();
/// let b: TokenAmount = "0.2".parse().unwrap();
/// assert_eq!(a + b, "0.3".parse().unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(BigDecimal);

impl TokenAmount {
    /// Create a new token amount from a BigDecimal
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Zero token amount
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True for amounts strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    /// Borrow the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consume into the inner decimal value
    pub fn into_decimal(self) -> BigDecimal {
        self.0
    }

    /// Truncate toward zero to the token's divisibility
    ///
    /// Digits beyond the divisibility are dropped, never rounded up, so a
    /// set of truncated shares can never exceed the untruncated total.
    ///
    /// # Examples
    ///
    /// ```
    /// use slpscan::{TokenAmount, TokenDivisibility};
    ///
    /// let amount: TokenAmount = "12.3456".parse().unwrap();
    /// let truncated = amount.truncate(TokenDivisibility::new(2).unwrap());
    /// assert_eq!(truncated, "12.34".parse().unwrap());
    /// ```
    pub fn truncate(&self, divisibility: TokenDivisibility) -> Self {
        Self(
            self.0
                .with_scale_round(divisibility.as_scale(), RoundingMode::Down),
        )
    }
}

impl FromStr for TokenAmount {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for TokenAmount {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let amount: TokenAmount = "1000.12345".parse().unwrap();
        assert_eq!(format!("{}", amount), "1000.12345");
    }

    #[test]
    fn test_exact_addition() {
        // The classic case binary floats get wrong
        let a: TokenAmount = "0.1".parse().unwrap();
        let b: TokenAmount = "0.2".parse().unwrap();
        assert_eq!(a + b, "0.3".parse().unwrap());
    }

    #[test]
    fn test_add_assign() {
        let mut total = TokenAmount::zero();
        total += "5.5".parse().unwrap();
        total += "4.5".parse().unwrap();
        assert_eq!(total, TokenAmount::from(10u64));
    }

    #[test]
    fn test_is_positive() {
        let positive: TokenAmount = "0.000000001".parse().unwrap();
        assert!(positive.is_positive());
        assert!(!TokenAmount::zero().is_positive());

        let negative: TokenAmount = "-1".parse().unwrap();
        assert!(!negative.is_positive());
    }

    #[test]
    fn test_truncate_drops_excess_digits() {
        let amount: TokenAmount = "12.3456".parse().unwrap();
        assert_eq!(
            amount.truncate(TokenDivisibility::new(2).unwrap()),
            "12.34".parse().unwrap()
        );
        assert_eq!(
            amount.truncate(TokenDivisibility::NONE),
            "12".parse().unwrap()
        );
    }

    #[test]
    fn test_truncate_never_rounds_up() {
        let amount: TokenAmount = "0.999999".parse().unwrap();
        assert_eq!(
            amount.truncate(TokenDivisibility::NONE),
            TokenAmount::zero()
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!("not-a-number".parse::<TokenAmount>().is_err());
    }

    #[test]
    fn test_serialization() {
        // Indexer documents carry amounts as decimal strings
        let amount: TokenAmount = serde_json::from_str("\"10.5\"").unwrap();
        assert_eq!(amount, "10.5".parse().unwrap());

        let json = serde_json::to_string(&amount).unwrap();
        let back: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);
    }
}
