//! Error types for the U2FVAL client
//!
//! Failures fall into two disjoint families:
//!
//! - [`ClientError`]: raised locally, when the server cannot be reached or
//!   answers with something the client cannot interpret.
//! - [`ServerError`]: the validation server reported a structured error
//!   (a JSON body carrying `errorCode`).
//!
//! Local configuration and input problems get their own variants on [`Error`].

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The main error type for the U2FVAL client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),

    // ============================================================================
    // Local Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for failures detected on the client side
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Client(_))
    }

    /// True when the server reported a structured error
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Server(_))
    }

    /// True when access was denied, either by status code or by error code
    pub fn is_bad_auth(&self) -> bool {
        match self {
            Error::Client(ClientError::BadAuth { .. }) => true,
            Error::Server(e) => e.kind == ServerErrorKind::BadAuth,
            _ => false,
        }
    }

    /// The structured server error, if this is one
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            Error::Server(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors generated on the client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The U2FVAL server cannot be reached
    #[error("U2FVAL server unreachable: {message}")]
    ServerUnreachable { message: String },

    /// The server sent something which is not valid
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Access was denied
    #[error("Access denied: {message}")]
    BadAuth { message: String },

    #[error("{message}")]
    Other { message: String },
}

impl ClientError {
    pub fn server_unreachable(message: impl Into<String>) -> Self {
        Self::ServerUnreachable {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn bad_auth(message: impl Into<String>) -> Self {
        Self::BadAuth {
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ClientError::ServerUnreachable { message }
            | ClientError::InvalidResponse { message }
            | ClientError::BadAuth { message }
            | ClientError::Other { message } => message,
        }
    }
}

/// Kind of a structured error reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerErrorKind {
    /// The arguments passed to the server are invalid
    BadInput,
    /// The user has no eligible devices capable of the requested action
    NoEligibleDevices,
    /// The device might be compromised, and has been blocked
    DeviceCompromised,
    /// The client credentials were rejected
    BadAuth,
    /// An error code this client does not know about
    Unknown,
}

/// Wire codes for the known error kinds
const ERROR_CODES: &[(i64, ServerErrorKind)] = &[
    (10, ServerErrorKind::BadInput),
    (11, ServerErrorKind::NoEligibleDevices),
    (12, ServerErrorKind::DeviceCompromised),
    (401, ServerErrorKind::BadAuth),
];

impl ServerErrorKind {
    /// Look up the kind for a wire error code
    pub fn from_code(code: i64) -> Self {
        ERROR_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(ServerErrorKind::Unknown, |(_, kind)| *kind)
    }

    /// The wire code for this kind (None for `Unknown`)
    pub fn code(self) -> Option<i64> {
        ERROR_CODES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(c, _)| *c)
    }
}

impl fmt::Display for ServerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerErrorKind::BadInput => "bad input",
            ServerErrorKind::NoEligibleDevices => "no eligible devices",
            ServerErrorKind::DeviceCompromised => "device compromised",
            ServerErrorKind::BadAuth => "bad authentication",
            ServerErrorKind::Unknown => "server error",
        };
        f.write_str(name)
    }
}

/// Error sent from the U2FVAL server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    pub kind: ServerErrorKind,
    /// The `errorCode` as sent (None if it was not an integer)
    pub code: Option<i64>,
    pub message: Option<String>,
    /// Operation-specific auxiliary data
    pub data: Option<Value>,
}

impl ServerError {
    pub fn new(kind: ServerErrorKind, message: Option<String>, data: Option<Value>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message,
            data,
        }
    }

    /// Build the error described by a server error payload
    ///
    /// Reads `errorCode`, `errorMessage` and `errorData`. A JSON `null`
    /// message or data counts as absent.
    pub fn from_response(payload: &Value) -> Self {
        let code = payload.get("errorCode").and_then(Value::as_i64);
        let kind = code.map_or(ServerErrorKind::Unknown, ServerErrorKind::from_code);

        let message = match payload.get("errorMessage") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        let data = payload
            .get("errorData")
            .filter(|v| !v.is_null())
            .cloned();

        Self {
            kind,
            code,
            message,
            data,
        }
    }

    /// Whether the user has devices at all
    ///
    /// Only meaningful for [`ServerErrorKind::NoEligibleDevices`], where the
    /// server signals prior device existence through `data`.
    pub fn has_devices(&self) -> bool {
        self.kind == ServerErrorKind::NoEligibleDevices
            && self.data.as_ref().is_some_and(is_truthy)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "U2FVAL {} ({code})", self.kind)?,
            None => write!(f, "U2FVAL {}", self.kind)?,
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// JSON truthiness: null, false, zero and empty containers are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Result type alias for the U2FVAL client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(10, ServerErrorKind::BadInput ; "bad input")]
    #[test_case(11, ServerErrorKind::NoEligibleDevices ; "no eligible devices")]
    #[test_case(12, ServerErrorKind::DeviceCompromised ; "device compromised")]
    #[test_case(401, ServerErrorKind::BadAuth ; "bad auth")]
    #[test_case(0xdead_beef, ServerErrorKind::Unknown ; "unknown code")]
    fn test_from_response_kind(code: i64, expected: ServerErrorKind) {
        let err = ServerError::from_response(&json!({ "errorCode": code }));
        assert_eq!(err.kind, expected);
        assert_eq!(err.code, Some(code));
    }

    #[test]
    fn test_from_response_non_integer_code() {
        let err = ServerError::from_response(&json!({ "errorCode": "ten" }));
        assert_eq!(err.kind, ServerErrorKind::Unknown);
        assert_eq!(err.code, None);
    }

    #[test]
    fn test_error_message() {
        let err = ServerError::from_response(&json!({
            "errorCode": 10,
            "errorMessage": "It's dead"
        }));
        assert_eq!(err.message.as_deref(), Some("It's dead"));
        assert_eq!(err.data, None);
    }

    #[test]
    fn test_error_data() {
        let err = ServerError::from_response(&json!({
            "errorCode": 10,
            "errorData": "Nailed to perch"
        }));
        assert_eq!(err.message, None);
        assert_eq!(err.data, Some(json!("Nailed to perch")));
    }

    #[test]
    fn test_null_message_and_data_are_absent() {
        let err = ServerError::from_response(&json!({
            "errorCode": 12,
            "errorMessage": null,
            "errorData": null
        }));
        assert_eq!(err.message, None);
        assert_eq!(err.data, None);
    }

    #[test]
    fn test_has_devices() {
        let none = ServerError::new(ServerErrorKind::NoEligibleDevices, None, None);
        assert!(!none.has_devices());

        let falsy = ServerError::new(
            ServerErrorKind::NoEligibleDevices,
            Some("It's dead".into()),
            Some(json!(false)),
        );
        assert!(!falsy.has_devices());

        let truthy = ServerError::new(
            ServerErrorKind::NoEligibleDevices,
            Some("It's dead".into()),
            Some(json!(true)),
        );
        assert!(truthy.has_devices());

        let other_kind = ServerError::new(ServerErrorKind::BadInput, None, Some(json!(true)));
        assert!(!other_kind.has_devices());
    }

    #[test]
    fn test_has_devices_from_response() {
        let err = ServerError::from_response(&json!({ "errorCode": 11 }));
        assert!(!err.has_devices());

        let err = ServerError::from_response(&json!({ "errorCode": 11, "errorData": 1 }));
        assert!(err.has_devices());
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(ServerError::new(
            ServerErrorKind::BadInput,
            Some("Invalid username".into()),
            None,
        ));
        assert_eq!(err.to_string(), "U2FVAL bad input (10): Invalid username");

        let err = Error::from(ClientError::other("Not found"));
        assert_eq!(err.to_string(), "Not found");

        let err = Error::config("missing endpoint");
        assert_eq!(err.to_string(), "Configuration error: missing endpoint");
    }

    #[test]
    fn test_families_are_disjoint() {
        let client = Error::from(ClientError::invalid_response("empty body"));
        assert!(client.is_client_error());
        assert!(!client.is_server_error());
        assert!(client.server_error().is_none());

        let server = Error::from(ServerError::from_response(&json!({ "errorCode": 12 })));
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
    }

    #[test]
    fn test_is_bad_auth_both_paths() {
        assert!(Error::from(ClientError::bad_auth("Access denied")).is_bad_auth());
        assert!(Error::from(ServerError::from_response(&json!({ "errorCode": 401 }))).is_bad_auth());
        assert!(!Error::from(ClientError::other("Not found")).is_bad_auth());
    }

    #[test]
    fn test_kind_code_round_trip() {
        assert_eq!(ServerErrorKind::BadAuth.code(), Some(401));
        assert_eq!(ServerErrorKind::Unknown.code(), None);
    }
}
