//! Railfetch API Client
//!
//! This crate talks to the Railway GraphQL API: it lists projects,
//! environments, services and deployments, and retrieves deployment logs.
//!
//! # Architecture
//!
//! - [`Config`] is loaded once and passed explicitly; there is no global state
//! - [`QueryClient`] executes one GraphQL operation and normalizes the outcome;
//!   [`RailwayClient`] is the HTTPS implementation
//! - [`queries`] holds the listing operations and the [`LogResolver`], which
//!   tries several log query shapes in order until one answers
//!
//! # Example
//!
//! ```no_run
//! use api::{Config, LogResolver, RailwayClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = RailwayClient::new(&config)?;
//!
//!     if let Some(logs) = LogResolver::new(&client).resolve("deployment-id", 1000).await {
//!         println!("found {} logs via {}", logs.payload.kind(), logs.strategy);
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
pub mod queries;

pub use client::{QueryClient, QueryError, RailwayClient};
pub use config::{Config, ConfigError, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use queries::{LogResolver, LogStrategy, ResolvedLogs};
