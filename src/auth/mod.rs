//! Authentication module
//!
//! Supports: no auth, API token (Bearer), HTTP auth (Basic or a custom scheme)
//!
//! An [`AuthStrategy`] augments the [`RequestOptions`](crate::http::RequestOptions)
//! of each outgoing request with authentication material. It never removes
//! fields it does not own.

mod strategy;
mod types;

pub use strategy::AuthStrategy;
pub use types::{AuthScheme, Credentials};

#[cfg(test)]
mod tests;
