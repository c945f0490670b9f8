//! Client state and the shared request primitive

use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result, ServerError};
use crate::http::{RawResponse, ReqwestTransport, RequestOptions, Transport};
use bytes::Bytes;
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parsed result of a request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body parsed as JSON
    Json(Value),
    /// Body returned untouched
    Raw(Bytes),
}

impl Payload {
    /// The body as JSON, parsing a raw body if needed
    pub fn json(self) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Raw(body) => parse_json(&body),
        }
    }

    /// The body as bytes
    pub fn bytes(self) -> Bytes {
        match self {
            Payload::Json(value) => Bytes::from(value.to_string()),
            Payload::Raw(body) => body,
        }
    }
}

/// Client for a U2FVAL server
///
/// Holds only immutable configuration, so it can be shared across threads.
#[derive(Clone)]
pub struct Client {
    endpoint: String,
    auth: AuthStrategy,
    default_options: RequestOptions,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client for the given endpoint with no authentication
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transport_for(endpoint, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client that sends its requests through `transport`
    pub fn with_transport_for(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint.into()),
            auth: AuthStrategy::None,
            default_options: RequestOptions::new(),
            transport,
        }
    }

    /// Set the auth strategy
    #[must_use]
    pub fn with_auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = auth;
        self
    }

    /// Set options applied to every request
    #[must_use]
    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = options;
        self
    }

    /// The normalized endpoint, always ending in `/`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    pub fn default_options(&self) -> &RequestOptions {
        &self.default_options
    }

    /// Make a request and interpret the response
    ///
    /// `extra` overrides the default options for this call only. When `json`
    /// is given it is sent as the request body. With `expect_json` the
    /// response body must parse as JSON; otherwise it is returned raw.
    pub fn request(
        &self,
        method: Method,
        url: &str,
        json: Option<&Value>,
        expect_json: bool,
        extra: RequestOptions,
    ) -> Result<Payload> {
        let mut options = self.auth.apply(self.default_options.merge(extra));

        if let Some(body) = json {
            options.set_header("Content-type", "application/json");
            options.body = Some(serde_json::to_string(body)?);
        }

        debug!("{} {}", method, url);
        let response = self.transport.send(method, url, &options)?;
        interpret_response(response, expect_json)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .field("auth", &self.auth)
            .field("default_options", &self.default_options)
            .finish_non_exhaustive()
    }
}

/// Append the trailing `/` if it is missing
fn normalize_endpoint(mut endpoint: String) -> String {
    if !endpoint.ends_with('/') {
        endpoint.push('/');
    }
    endpoint
}

/// Turn a raw HTTP response into a payload or an error
pub(crate) fn interpret_response(response: RawResponse, expect_json: bool) -> Result<Payload> {
    let RawResponse { status, body } = response;

    if status < 400 {
        if !expect_json {
            return Ok(Payload::Raw(body));
        }
        return parse_json(&body).map(Payload::Json);
    }

    if let Ok(data) = serde_json::from_slice::<Value>(&body) {
        if data.get("errorCode").is_some() {
            let err = ServerError::from_response(&data);
            warn!("U2FVAL server returned HTTP {}: {}", status, err);
            return Err(err.into());
        }
    }

    let err = match status {
        401 => ClientError::bad_auth("Access denied"),
        404 => ClientError::other("Not found"),
        _ => ClientError::invalid_response(format!("Unexpected HTTP status {status}")),
    };
    Err(err.into())
}

fn parse_json(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        ClientError::invalid_response(format!("Response body is not valid JSON: {e}")).into()
    })
}
