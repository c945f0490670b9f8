//! HTTP module
//!
//! Request options threaded through one call, and the transport that
//! performs the actual HTTP exchange.
//!
//! # Features
//!
//! - **Request Options**: headers, query pairs, body, credentials, timeout
//! - **Pluggable Transport**: any blocking HTTP client behind [`Transport`]
//! - **Default Transport**: [`ReqwestTransport`] over `reqwest::blocking`

mod options;
mod transport;

pub use options::RequestOptions;
pub use transport::{RawResponse, ReqwestTransport, Transport};
