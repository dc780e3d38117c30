use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a wire payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Input is not valid JSON at all
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A present field's JSON type or format disagrees with the schema
    #[error("type mismatch at `{field}`: {expected}")]
    TypeMismatch {
        /// Path of the offending field (e.g. `choices[0].message`)
        field: String,
        /// What the schema expected there
        expected: String,
    },

    /// A required field is absent from the payload
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    /// A variant discriminator matched no declared alternative
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),

    /// The value could not be serialized to JSON
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Map a typed deserialization failure onto the error taxonomy.
///
/// Syntax and EOF failures are unrecoverable `MalformedPayload`. Data-shape
/// failures are split on the serde message: serde reports missing fields and
/// unmatched discriminators with fixed phrasings, everything else is a type
/// or format mismatch at the recorded path.
pub(crate) fn classify_decode(err: &serde_path_to_error::Error<serde_json::Error>) -> WireError {
    let inner = err.inner();
    if matches!(inner.classify(), Category::Syntax | Category::Eof) {
        return WireError::MalformedPayload(strip_location(&inner.to_string()));
    }

    let path = err.path().to_string();
    let detail = inner.to_string();

    if let Some(field) = backticked(&detail, "missing field `") {
        let field = if path == "." {
            field
        } else {
            format!("{path}.{field}")
        };
        return WireError::MissingRequiredField(field);
    }
    if let Some(value) = backticked(&detail, "unknown variant `") {
        return WireError::UnknownVariant(value);
    }

    WireError::TypeMismatch {
        field: path,
        expected: strip_location(&detail),
    }
}

/// Extract the backtick-quoted token following `prefix`, if the message
/// starts with that prefix.
fn backticked(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?;
    rest.split('`').next().map(ToOwned::to_owned)
}

/// Drop the ` at line L column C` suffix serde_json appends to messages.
fn strip_location(message: &str) -> String {
    message
        .split(" at line ")
        .next()
        .unwrap_or(message)
        .to_owned()
}
