//! Unix timestamp type shared by the resolver and the ledger node boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds (always UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnixTimestamp(pub i64);

impl UnixTimestamp {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Creates a UnixTimestamp from a u64 value
    pub fn from_u64(ts: u64) -> Self {
        Self(ts as i64)
    }

    /// Converts to u64 for use with ledger block timestamps
    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_datetime() {
        let dt = DateTime::parse_from_rfc3339("2018-08-14T12:35:55Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(UnixTimestamp::from_datetime(dt), UnixTimestamp(1_534_250_155));
    }

    #[test]
    fn test_u64_round_trip() {
        let ts = UnixTimestamp::from_u64(1_534_250_155);
        assert_eq!(ts.as_u64(), 1_534_250_155);
        assert_eq!(ts.as_i64(), 1_534_250_155);
        assert_eq!(format!("{ts}"), "1534250155");
    }
}
