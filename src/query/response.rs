//! Response envelope for indexer queries

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::QueryError;

/// Raw response to an aggregation query, keyed by source collection.
///
/// The indexer answers with a JSON object whose keys mirror the `db` list
/// of the query: `c` confirmed transactions, `u` unconfirmed, `t` token
/// details, `s` indexer status. Collections the query did not touch are
/// absent and default to empty; any other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub c: Vec<Value>,
    #[serde(default)]
    pub u: Vec<Value>,
    #[serde(default)]
    pub t: Vec<Value>,
    #[serde(default)]
    pub s: Vec<Value>,
}

impl QueryResponse {
    /// Decode the confirmed-transaction documents into a typed list
    pub fn confirmed<T: DeserializeOwned>(&self) -> Result<Vec<T>, QueryError> {
        decode("c", &self.c)
    }

    /// Decode the unconfirmed-transaction documents into a typed list
    pub fn unconfirmed<T: DeserializeOwned>(&self) -> Result<Vec<T>, QueryError> {
        decode("u", &self.u)
    }

    /// Decode the token documents into a typed list
    pub fn tokens<T: DeserializeOwned>(&self) -> Result<Vec<T>, QueryError> {
        decode("t", &self.t)
    }

    /// Read the best indexed height out of a status response
    pub fn indexed_height(&self) -> Result<u64, QueryError> {
        let doc = self
            .s
            .first()
            .ok_or_else(|| QueryError::missing_data("status document"))?;
        doc.get("blk")
            .and_then(Value::as_u64)
            .ok_or_else(|| QueryError::missing_data("blk field in status document"))
    }
}

fn decode<T: DeserializeOwned>(
    collection: &'static str,
    docs: &[Value],
) -> Result<Vec<T>, QueryError> {
    docs.iter()
        .map(|doc| {
            serde_json::from_value(doc.clone()).map_err(|e| QueryError::decode_failed(collection, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_collections_default_to_empty() {
        let response: QueryResponse = serde_json::from_value(json!({
            "c": [{ "txid": "ab" }],
        }))
        .unwrap();

        assert_eq!(response.c.len(), 1);
        assert!(response.u.is_empty());
        assert!(response.t.is_empty());
        assert!(response.s.is_empty());
    }

    #[test]
    fn test_unknown_collections_are_ignored() {
        let response: QueryResponse = serde_json::from_value(json!({
            "t": [],
            "g": [{ "graphTxn": {} }],
        }))
        .unwrap();

        assert!(response.t.is_empty());
    }

    #[test]
    fn test_indexed_height_reads_first_status_document() {
        let response: QueryResponse = serde_json::from_value(json!({
            "s": [{ "blk": 620_971 }],
        }))
        .unwrap();

        assert_eq!(response.indexed_height().unwrap(), 620_971);
    }

    #[test]
    fn test_indexed_height_requires_status_document() {
        let response = QueryResponse::default();
        let err = response.indexed_height().unwrap_err();
        assert!(matches!(err, QueryError::MissingData { .. }));
    }

    #[test]
    fn test_decode_error_names_collection() {
        #[derive(Debug, serde::Deserialize)]
        struct Typed {
            #[allow(dead_code)]
            blk: u64,
        }

        let response: QueryResponse = serde_json::from_value(json!({
            "c": [{ "blk": "not a number" }],
        }))
        .unwrap();

        let err = response.confirmed::<Typed>().unwrap_err();
        assert!(matches!(err, QueryError::DecodeFailed { collection: "c", .. }));
    }
}
