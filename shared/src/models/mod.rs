//! Data models for Railfetch.
//!
//! This module contains the GraphQL envelopes, the Railway resource records
//! returned by the listing queries, and the deployment log payload.

pub mod graphql;
pub mod logs;
pub mod railway;

pub use graphql::{GraphQlError, GraphQlFailure, GraphQlRequest, GraphQlResponse};
pub use logs::LogPayload;
pub use railway::{Connection, Deployment, Edge, Environment, Project, Service};
