//! Search response schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

/// The first match returned by the search service.
///
/// On the wire the service answers with an array whose first element is
/// `[decryptedData, matchMetadata]`. Both halves stay opaque JSON, and
/// nothing after the first element is interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The decrypted record held by the vault.
    pub decrypted_data: Value,
    /// Match metadata, such as the pseudonym.
    pub match_metadata: Value,
}

impl SearchResult {
    /// Validate a positional search response and name its parts.
    pub fn from_response(response: Value) -> Result<Self, ProtocolError> {
        let entries = match response {
            Value::Array(entries) => entries,
            other => {
                return Err(ProtocolError::shape(format!(
                    "expected an array, got {}",
                    kind(&other)
                )));
            }
        };

        let first = entries
            .into_iter()
            .next()
            .ok_or_else(|| ProtocolError::shape("response array is empty"))?;

        match first {
            Value::Array(pair) if pair.len() == 2 => {
                let mut pair = pair.into_iter();
                let decrypted_data = pair.next().unwrap_or(Value::Null);
                let match_metadata = pair.next().unwrap_or(Value::Null);
                Ok(Self {
                    decrypted_data,
                    match_metadata,
                })
            }
            Value::Array(pair) => Err(ProtocolError::shape(format!(
                "first entry has {} elements, expected 2",
                pair.len()
            ))),
            other => Err(ProtocolError::shape(format!(
                "first entry is {}, expected a 2-element array",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
