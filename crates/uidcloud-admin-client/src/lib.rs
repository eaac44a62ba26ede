//! Client for the uidcloud realm admin REST API.
//!
//! [`AdminClient`] wraps a pre-acquired bearer token and a base URL; every
//! operation is a single request against the realm-scoped admin endpoints
//! with no retries, caching, or local state.

#![deny(clippy::unwrap_used)]

pub mod client;
pub mod error;
pub mod types;

mod groups;
mod user_groups;

pub use crate::client::AdminClient;
pub use crate::error::{ClientError, Result};
pub use crate::types::{CreateGroupOptions, GroupQuery, GroupRepresentation};
