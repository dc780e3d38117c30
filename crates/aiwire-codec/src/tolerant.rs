//! Field-stripping pre-pass for providers that emit unparseable fields
//!
//! Some providers populate a field with a value that is valid JSON but
//! incompatible with the declared schema, and only in certain response
//! states (an `error` object on failure, logs with pathological content).
//! Rather than loosening the typed schema — which would mask genuine type
//! errors everywhere else — the named fields are removed from a generic
//! JSON tree before the typed decoder runs.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::codec::decode;
use crate::error::WireError;

/// Remove the named top-level fields from a JSON object payload (or from
/// every element of an array of objects) and re-serialize.
///
/// A payload that fails to parse as generic JSON is `MalformedPayload`;
/// stripping cannot recover from that, since it operates on the parsed
/// tree rather than on raw text. Absence of a named field is not an error.
pub fn strip_fields(fields: &[&str], bytes: &[u8]) -> Result<Vec<u8>, WireError> {
    let mut value: Value =
        serde_json::from_slice(bytes).map_err(|err| WireError::MalformedPayload(err.to_string()))?;

    match &mut value {
        Value::Object(map) => strip_object(fields, map),
        Value::Array(items) => {
            for item in items.iter_mut() {
                if let Value::Object(map) = item {
                    strip_object(fields, map);
                }
            }
        }
        // Scalars have no fields to strip; the typed decoder will report
        // the shape mismatch.
        _ => {}
    }

    serde_json::to_vec(&value).map_err(|err| WireError::Encode(err.to_string()))
}

fn strip_object(fields: &[&str], map: &mut serde_json::Map<String, Value>) {
    for &field in fields {
        if map.remove(field).is_some() {
            debug!(field, "stripped field before typed decoding");
        }
    }
}

/// Strip the named fields, then decode the cleaned payload.
///
/// Invoked explicitly per entity that needs it; most entities decode
/// directly via [`decode`].
pub fn decode_tolerant<T: DeserializeOwned>(fields: &[&str], bytes: &[u8]) -> Result<T, WireError> {
    let cleaned = strip_fields(fields, bytes)?;
    decode(&cleaned)
}
