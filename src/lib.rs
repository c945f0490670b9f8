//! # U2FVAL Client
//!
//! Client library for a U2FVAL server: register, list, update and remove
//! U2F devices for a user, and run the authentication ceremony.
//!
//! The client is a thin translation layer. Each method issues exactly one
//! blocking HTTP request and turns the response into JSON, raw bytes, or a
//! typed [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use u2fval_client::{AuthStrategy, Client, Result};
//!
//! fn main() -> Result<()> {
//!     let client = Client::new("https://u2fval.example.com/api")
//!         .with_auth(AuthStrategy::api_token("7f3a9c"));
//!
//!     let request = client.register_begin("black_knight", None, None)?;
//!     // ... pass `request` to the U2F device, then:
//!     let device = client.register_complete("black_knight", r#"{"registrationData": "..."}"#, None)?;
//!     println!("{device}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Client                              │
//! │  list_devices  register_begin/complete  auth_begin/complete│
//! └──────────────────────────────┬─────────────────────────────┘
//!                                │ request(method, url, json, expect_json)
//! ┌──────────────┬───────────────┴──────────┬──────────────────┐
//! │ AuthStrategy │     RequestOptions       │    Transport     │
//! ├──────────────┼──────────────────────────┼──────────────────┤
//! │ None         │ headers, query, body     │ reqwest blocking │
//! │ ApiToken     │ credentials, timeout     │ (pluggable)      │
//! │ HttpAuth     │                          │                  │
//! └──────────────┴──────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authentication strategies
pub mod auth;

/// Request options and HTTP transport
pub mod http;

/// The U2FVAL client
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthScheme, AuthStrategy, Credentials};
pub use client::{Client, Payload, Properties};
pub use config::{AuthConfig, ClientConfig};
pub use error::{ClientError, Error, Result, ServerError, ServerErrorKind};
pub use http::{RawResponse, ReqwestTransport, RequestOptions, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
