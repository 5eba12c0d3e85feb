//! Canonical cache-key derivation for list queries.
//!
//! Map parameters are serialized with their keys sorted, so logically
//! identical queries produce the same key regardless of how the criteria were
//! assembled. Collision-freedom is structural, not cryptographic: the key is
//! a lookup token, not a digest.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::store::filter::FilterCriteria;

/// One positional call parameter contributing to a cache key.
#[derive(Debug, Clone)]
pub enum KeyPart {
    Int(i64),
    Text(String),
    Map(BTreeMap<String, Value>),
}

/// Derive a canonical string key from heterogeneous call parameters.
///
/// Each part is appended as its textual representation followed by `:`; zero
/// parts produce the empty string.
pub fn derive_cache_key(parts: &[KeyPart]) -> String {
    let mut key = String::new();
    for part in parts {
        match part {
            KeyPart::Int(value) => key.push_str(&value.to_string()),
            KeyPart::Text(value) => key.push_str(value),
            KeyPart::Map(map) => {
                key.push_str(&serde_json::to_string(map).unwrap_or_default());
            }
        }
        key.push(':');
    }
    key
}

/// Project the present filter criteria into a sorted map for key derivation.
/// Absent criteria contribute no entry.
pub fn criteria_key_map(criteria: &FilterCriteria) -> BTreeMap<String, Value> {
    match serde_json::to_value(criteria) {
        Ok(Value::Object(entries)) => entries.into_iter().collect(),
        _ => BTreeMap::new(),
    }
}
