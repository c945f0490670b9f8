//! HTTP transport
//!
//! The [`Transport`] trait is the seam between the client and the HTTP
//! library. It performs exactly one exchange per call: no retries, no
//! status interpretation.

use super::options::RequestOptions;
use crate::auth::Credentials;
use crate::error::{ClientError, Result};
use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::Method;
use tracing::{debug, warn};

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Blocking HTTP transport
///
/// Implementations must report an unreachable host as
/// [`ClientError::ServerUnreachable`].
pub trait Transport: Send + Sync {
    /// Perform one request and return the raw response
    fn send(&self, method: Method, url: &str, options: &RequestOptions) -> Result<RawResponse>;
}

/// Transport backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport with a custom user agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, method: Method, url: &str, options: &RequestOptions) -> Result<RawResponse> {
        let mut req = self.client.request(method, url);

        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !options.query.is_empty() {
            req = req.query(&options.query);
        }

        if let Some(ref body) = options.body {
            req = req.body(body.clone());
        }

        match options.credentials {
            Some(Credentials::Basic {
                ref username,
                ref password,
            }) => req = req.basic_auth(username, Some(password)),
            Some(Credentials::Header {
                ref name,
                ref value,
            }) => req = req.header(name.as_str(), value.as_str()),
            None => {}
        }

        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| {
            ClientError::invalid_response(format!("Failed to read response body: {e}"))
        })?;

        debug!("Received HTTP {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}

fn map_send_error(e: reqwest::Error) -> crate::error::Error {
    if e.is_connect() {
        warn!("Connection to U2FVAL server failed: {}", e);
        ClientError::server_unreachable(e.to_string()).into()
    } else {
        ClientError::other(format!("HTTP request failed: {e}")).into()
    }
}
