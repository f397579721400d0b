//! Railfetch Shared Library
//!
//! This crate contains the transport-independent pieces of Railfetch:
//! GraphQL envelopes, Railway resource models, response navigation, and
//! log file persistence.
//!
//! # Modules
//!
//! - [`models`] - GraphQL requests/responses, Railway records, log payloads
//! - [`query`] - Extraction paths over untyped response data
//! - [`storage`] - Timestamped log file persistence
//!
//! # Example
//!
//! ```
//! use shared::models::{GraphQlResponse, LogPayload};
//! use shared::query::ExtractionPath;
//! use serde_json::json;
//!
//! let response: GraphQlResponse = serde_json::from_value(json!({
//!     "data": {"deployment": {"id": "d1", "logs": "boot ok"}}
//! }))
//! .unwrap();
//!
//! let data = response.into_data().unwrap();
//! let logs = ExtractionPath::new(["deployment", "logs"]).resolve(&data).cloned();
//!
//! assert_eq!(logs.map(LogPayload::from), Some(LogPayload::Text("boot ok".into())));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod query;
pub mod storage;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
