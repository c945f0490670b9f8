//! Client configuration
//!
//! A [`ClientConfig`] can be written in YAML or JSON:
//!
//! ```yaml
//! endpoint: https://u2fval.example.com/api/
//! auth:
//!   type: token
//!   token: 7f3a...
//! timeout_seconds: 10
//! headers:
//!   X-Client: my-app
//! ```

use crate::auth::AuthStrategy;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::{ReqwestTransport, RequestOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Authentication section of the configuration
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// API token (Bearer)
    Token { token: String },
    /// HTTP Basic auth
    Basic { username: String, password: String },
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Token { .. } => f.debug_struct("Token").field("token", &"***").finish(),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

impl AuthConfig {
    pub fn to_strategy(&self) -> AuthStrategy {
        match self {
            AuthConfig::None => AuthStrategy::None,
            AuthConfig::Token { token } => AuthStrategy::api_token(token.clone()),
            AuthConfig::Basic { username, password } => {
                AuthStrategy::http_auth(username.clone(), password.clone())
            }
        }
    }
}

/// Configuration for a [`Client`]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the U2FVAL server
    pub endpoint: String,

    #[serde(default)]
    pub auth: AuthConfig,

    /// Timeout applied to every request
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

// Header values may carry credentials, so only their names are shown
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("auth", &self.auth)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("headers", &header_names)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for an endpoint with everything else defaulted
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth: AuthConfig::None,
            timeout_seconds: None,
            headers: HashMap::new(),
            user_agent: None,
        }
    }

    /// Parse a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Check that the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_seconds == Some(0) {
            return Err(Error::config("timeout_seconds must be greater than zero"));
        }
        Ok(())
    }

    /// Request options every call will start from
    pub fn default_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        for (key, value) in &self.headers {
            options = options.header(key.as_str(), value.as_str());
        }
        if let Some(secs) = self.timeout_seconds {
            options = options.timeout(Duration::from_secs(secs));
        }
        options
    }

    /// Validate the config and build a client from it
    pub fn build_client(&self) -> Result<Client> {
        self.validate()?;

        let transport = match self.user_agent {
            Some(ref agent) => ReqwestTransport::with_user_agent(agent)?,
            None => ReqwestTransport::new(),
        };

        Ok(
            Client::with_transport_for(self.endpoint.clone(), Arc::new(transport))
                .with_auth(self.auth.to_strategy())
                .with_default_options(self.default_options()),
        )
    }
}
