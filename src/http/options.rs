//! Per-request options

use crate::auth::Credentials;
use std::collections::HashMap;
use std::time::Duration;

/// Transport parameters for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, in order (a key may repeat)
    pub query: Vec<(String, String)>,
    /// Serialized request body
    pub body: Option<String>,
    /// HTTP auth credentials
    pub credentials: Option<Credentials>,
    /// Timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key, value);
        self
    }

    /// Set a header, replacing any existing one whose name differs only in case
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&key));
        self.headers.insert(key, value.into());
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set HTTP auth credentials
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Merge call-specific overrides on top of these options
    ///
    /// Returns a fresh value. Override headers win per name (ignoring
    /// case), query keys
    /// present in the overrides replace every default pair with that key,
    /// and the remaining fields are taken from the overrides when set.
    pub fn merge(&self, overrides: RequestOptions) -> RequestOptions {
        let mut merged = self.clone();

        for (key, value) in overrides.headers {
            merged.set_header(key, value);
        }

        if !overrides.query.is_empty() {
            merged
                .query
                .retain(|(key, _)| !overrides.query.iter().any(|(k, _)| k == key));
            merged.query.extend(overrides.query);
        }

        if overrides.body.is_some() {
            merged.body = overrides.body;
        }
        if overrides.credentials.is_some() {
            merged.credentials = overrides.credentials;
        }
        if overrides.timeout.is_some() {
            merged.timeout = overrides.timeout;
        }

        merged
    }
}
