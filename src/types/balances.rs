//! Per-address balance snapshot

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;

/// Aggregated token balances keyed by holder address
///
/// Addresses keep the order of their first credit, so a snapshot built from
/// the category-ordered TXO list iterates identically across runs. Totals
/// are exact decimal sums.
///
/// # Examples
///
/// ```
/// use slpscan::BalanceMap;
///
/// let mut balances = BalanceMap::new();
/// balances.credit("alice", "1.5".parse().unwrap());
/// balances.credit("bob", "2".parse().unwrap());
/// balances.credit("alice", "0.5".parse().unwrap());
///
/// assert_eq!(balances.get("alice"), Some(&"2".parse().unwrap()));
/// assert_eq!(balances.total(), "4".parse().unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceMap(IndexMap<String, TokenAmount>);

impl BalanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to an address, inserting the address on first credit
    pub fn credit(&mut self, address: impl Into<String>, amount: TokenAmount) {
        match self.0.entry(address.into()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            Entry::Vacant(entry) => {
                entry.insert(amount);
            }
        }
    }

    pub fn get(&self, address: &str) -> Option<&TokenAmount> {
        self.0.get(address)
    }

    /// Number of addresses, including zero balances
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of addresses holding a strictly positive balance
    pub fn positive_count(&self) -> usize {
        self.0.values().filter(|amount| amount.is_positive()).count()
    }

    /// Iterate in first-credit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenAmount)> {
        self.0.iter().map(|(address, amount)| (address.as_str(), amount))
    }

    /// Sum of every balance in the map
    pub fn total(&self) -> TokenAmount {
        self.0
            .values()
            .fold(TokenAmount::zero(), |total, amount| total + amount.clone())
    }

    /// Render each balance as a plain decimal string, preserving order
    pub fn display_strings(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(address, amount)| (address.clone(), amount.to_string()))
            .collect()
    }
}

impl IntoIterator for BalanceMap {
    type Item = (String, TokenAmount);
    type IntoIter = indexmap::map::IntoIter<String, TokenAmount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, TokenAmount)> for BalanceMap {
    fn from_iter<I: IntoIterator<Item = (String, TokenAmount)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (address, amount) in iter {
            map.credit(address, amount);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_merges_repeat_addresses() {
        let mut balances = BalanceMap::new();
        balances.credit("a", "1.1".parse().unwrap());
        balances.credit("a", "2.2".parse().unwrap());

        assert_eq!(balances.len(), 1);
        assert_eq!(balances.get("a"), Some(&"3.3".parse().unwrap()));
    }

    #[test]
    fn test_iteration_preserves_first_credit_order() {
        let mut balances = BalanceMap::new();
        balances.credit("charlie", TokenAmount::from(1u64));
        balances.credit("alice", TokenAmount::from(2u64));
        balances.credit("bob", TokenAmount::from(3u64));
        // A repeat credit must not move charlie
        balances.credit("charlie", TokenAmount::from(4u64));

        let order: Vec<&str> = balances.iter().map(|(address, _)| address).collect();
        assert_eq!(order, vec!["charlie", "alice", "bob"]);
    }

    #[test]
    fn test_total_is_exact() {
        let mut balances = BalanceMap::new();
        balances.credit("a", "0.1".parse().unwrap());
        balances.credit("b", "0.2".parse().unwrap());
        assert_eq!(balances.total(), "0.3".parse().unwrap());
    }

    #[test]
    fn test_positive_count_skips_zero_balances() {
        let mut balances = BalanceMap::new();
        balances.credit("a", TokenAmount::from(5u64));
        balances.credit("b", TokenAmount::zero());

        assert_eq!(balances.len(), 2);
        assert_eq!(balances.positive_count(), 1);
    }

    #[test]
    fn test_display_strings() {
        let mut balances = BalanceMap::new();
        balances.credit("a", "10.50".parse().unwrap());
        let rendered = balances.display_strings();
        assert_eq!(rendered, vec![("a".to_string(), "10.50".to_string())]);
    }
}
