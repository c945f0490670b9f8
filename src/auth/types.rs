//! Credential types

use std::fmt;
use std::sync::Arc;

/// Credentials attached to a request by HTTP auth
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Raw username/password pair, sent as HTTP Basic auth
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// A single header produced by a custom auth scheme
    Header {
        /// Header name
        name: String,
        /// Header value
        value: String,
    },
}

impl Credentials {
    /// Create a Basic credential pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a header credential
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Header {
            name: name.into(),
            value: value.into(),
        }
    }
}

// Keep secrets out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::Header { name, .. } => f
                .debug_struct("Header")
                .field("name", name)
                .field("value", &"***")
                .finish(),
        }
    }
}

/// Constructor for a custom HTTP auth scheme
///
/// Called once with the username and password when the strategy is built.
pub type AuthScheme = Arc<dyn Fn(&str, &str) -> Credentials + Send + Sync>;
