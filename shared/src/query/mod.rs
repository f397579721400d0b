//! Navigation of untyped GraphQL response data.
//!
//! Responses are kept as `serde_json::Value` trees because the log field's
//! location differs between schema versions. An [`ExtractionPath`] names the
//! chain of fields to follow; every caller shares the same short-circuiting
//! resolver.
//!
//! # Example
//!
//! ```
//! use shared::query::ExtractionPath;
//! use serde_json::json;
//!
//! let path = ExtractionPath::new(["node", "logs"]);
//! assert!(path.resolve(&json!({"node": null})).is_none());
//! ```

mod path;

pub use path::{ExtractionPath, PathError};
