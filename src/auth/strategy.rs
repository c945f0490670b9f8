//! Auth strategy implementation

use super::types::{AuthScheme, Credentials};
use crate::http::RequestOptions;
use std::fmt;

/// Strategy for authenticating against the U2FVAL server
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthStrategy {
    /// No authentication required
    #[default]
    None,

    /// API token, sent as `Authorization: Bearer <token>`
    ApiToken(String),

    /// HTTP auth credentials
    HttpAuth(Credentials),
}

impl AuthStrategy {
    /// Authenticate with an API token
    pub fn api_token(token: impl Into<String>) -> Self {
        Self::ApiToken(token.into())
    }

    /// Authenticate with a raw username/password pair
    pub fn http_auth(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::HttpAuth(Credentials::basic(username, password))
    }

    /// Authenticate with a custom scheme built from username and password
    pub fn http_auth_with_scheme(username: &str, password: &str, scheme: &AuthScheme) -> Self {
        Self::HttpAuth(scheme(username, password))
    }

    /// Apply authentication to the options of one request
    pub fn apply(&self, mut options: RequestOptions) -> RequestOptions {
        match self {
            AuthStrategy::None => options,
            AuthStrategy::ApiToken(token) => {
                options.set_header("Authorization", format!("Bearer {token}"));
                options
            }
            AuthStrategy::HttpAuth(credentials) => {
                options.credentials = Some(credentials.clone());
                options
            }
        }
    }
}

impl fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthStrategy::None => f.write_str("None"),
            AuthStrategy::ApiToken(_) => f.debug_tuple("ApiToken").field(&"***").finish(),
            AuthStrategy::HttpAuth(credentials) => {
                f.debug_tuple("HttpAuth").field(credentials).finish()
            }
        }
    }
}
