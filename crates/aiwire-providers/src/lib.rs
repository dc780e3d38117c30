//! Wire format types for third-party AI provider HTTP APIs
//!
//! Each module contains pure serde structs matching the respective provider's
//! JSON API format. These types exist only for serialization and
//! deserialization at the byte boundary; transport, auth, and URL
//! construction belong to the caller.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod fal;
pub mod mistral;
pub mod replicate;

pub use aiwire_codec::{WireDecode, WireEncode, WireError};
