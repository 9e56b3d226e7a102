use serde_json::Value;
use thiserror::Error;

/// Errors that reject a subscription source as a whole.
///
/// Every variant means the same thing to a caller: the supplied bytes are not a
/// usable export and nothing was imported. The variants only record which
/// check failed first.
#[derive(Debug, Error)]
pub enum InvalidSourceError {
    /// The bytes are not valid UTF-8 text.
    #[error("Failed to decode source as UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// The text is not a JSON document.
    #[error("Failed to parse source as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is a markup document (XML, OPML), which is not a supported export.
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(&'static str),

    /// The top-level JSON value is not an array.
    #[error("Expected a JSON array of subscriptions, found {0}")]
    NotAnArray(&'static str),

    /// An element of the top-level array is not a JSON object.
    #[error("Subscription entry {index} is {kind}, expected an object")]
    ElementNotObject { index: usize, kind: &'static str },

    /// The source exceeds the configured size cap.
    #[error("Source exceeds maximum size of {limit} bytes")]
    TooLarge { limit: u64 },

    /// The reader failed while the source was being drained.
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Human-readable name of a JSON value's type, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
