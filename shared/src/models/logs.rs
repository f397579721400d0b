//! Deployment log payloads.
//!
//! The log field returned by the API has no fixed schema: depending on which
//! query shape answered, it may be a single text blob, a list of entries, or
//! some other JSON document. `LogPayload` captures those three cases; the
//! "no logs" case is `Option::None` at the call sites.

use serde_json::Value;

/// Log data obtained for a deployment.
#[derive(Debug, Clone, PartialEq)]
pub enum LogPayload {
    /// A single raw text blob.
    Text(String),
    /// An ordered list of opaque entries (records or scalars).
    Entries(Vec<Value>),
    /// Any other JSON shape.
    Document(Value),
}

impl LogPayload {
    /// Returns `true` if the payload holds no log content.
    ///
    /// Empty text, an empty entry list, and an empty object all count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Entries(entries) => entries.is_empty(),
            Self::Document(Value::Object(map)) => map.is_empty(),
            Self::Document(Value::Null) => true,
            Self::Document(_) => false,
        }
    }

    /// Short label for the payload kind, used in log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Entries(_) => "entries",
            Self::Document(_) => "document",
        }
    }
}

impl From<Value> for LogPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(entries) => Self::Entries(entries),
            other => Self::Document(other),
        }
    }
}
