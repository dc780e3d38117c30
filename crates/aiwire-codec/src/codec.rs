//! Typed decode/encode entry points and the per-entity descriptor traits

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{WireError, classify_decode};
use crate::tolerant::decode_tolerant;

/// Decode a complete JSON payload into a typed value.
///
/// The returned value owns all of its data; nothing borrows from `bytes`.
/// Trailing non-whitespace after the JSON document is rejected.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, WireError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|err| classify_decode(&err))?;
    de.end()
        .map_err(|err| WireError::MalformedPayload(err.to_string()))?;
    Ok(value)
}

/// Encode a typed value to its JSON wire representation.
///
/// Absent optionals are omitted by the schema declarations themselves
/// (`skip_serializing_if`); fields are emitted in declaration order.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, WireError> {
    serde_json::to_vec(value).map_err(|err| WireError::Encode(err.to_string()))
}

/// An outbound body with a fixed wire encoding.
///
/// The implementing type is the entity descriptor; there is no registry.
pub trait WireEncode: Serialize {
    /// Serialize to the provider's JSON wire format.
    fn to_wire(&self) -> Result<Vec<u8>, WireError> {
        encode(self)
    }
}

/// An inbound body with a fixed wire decoding.
///
/// Most entities decode directly. Entities whose provider is known to emit
/// schema-incompatible values in specific fields override `STRIPPED_FIELDS`
/// to route through the tolerant pre-pass.
pub trait WireDecode: DeserializeOwned {
    /// Top-level fields removed from the payload before typed decoding.
    const STRIPPED_FIELDS: &'static [&'static str] = &[];

    /// Decode from the provider's JSON wire format.
    fn from_wire(bytes: &[u8]) -> Result<Self, WireError> {
        if Self::STRIPPED_FIELDS.is_empty() {
            decode(bytes)
        } else {
            decode_tolerant(Self::STRIPPED_FIELDS, bytes)
        }
    }
}
