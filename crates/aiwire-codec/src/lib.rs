//! Byte-level JSON codec for provider wire schemas
//!
//! Providers speak JSON with their own quirks: snake_case renames, flattened
//! discriminated unions, and the occasional field whose value does not fit
//! any stable schema. This crate holds the decode/encode entry points, the
//! error taxonomy, and the tolerant pre-pass that strips known-bad fields
//! from a payload before typed decoding.
//!
//! Everything here is a pure function over a complete byte payload; transport
//! concerns (HTTP, auth, retries, streaming framing) live with the caller.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod codec;
pub mod error;
pub mod tolerant;

pub use codec::{WireDecode, WireEncode, decode, encode};
pub use error::WireError;
pub use tolerant::{decode_tolerant, strip_fields};
