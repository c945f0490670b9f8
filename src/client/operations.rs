//! Remote operations
//!
//! URLs are the normalized endpoint followed by the user name and, where
//! relevant, a device handle or ceremony name. Optional query parameters are
//! left out entirely when not given.

use super::api::Client;
use crate::error::Result;
use crate::http::RequestOptions;
use bytes::Bytes;
use reqwest::Method;
use serde_json::{Map, Value};

/// Free-form device or ceremony properties
pub type Properties = Map<String, Value>;

impl Client {
    /// Get the trusted facets for the configured application
    pub fn get_trusted_facets(&self) -> Result<Value> {
        self.get_json(self.endpoint(), RequestOptions::new())
    }

    /// List the devices registered to a user
    pub fn list_devices(&self, username: &str) -> Result<Value> {
        self.get_json(&self.user_url(username), RequestOptions::new())
    }

    /// Get a single device
    pub fn get_device(&self, username: &str, handle: &str) -> Result<Value> {
        self.get_json(&self.device_url(username, handle), RequestOptions::new())
    }

    /// Get the attestation certificate of a device, as raw bytes
    pub fn get_certificate(&self, username: &str, handle: &str) -> Result<Bytes> {
        let url = self.device_url(username, handle);
        let payload = self.request(Method::GET, &url, None, false, RequestOptions::new())?;
        Ok(payload.bytes())
    }

    /// Delete a user and all of their devices
    pub fn delete_user(&self, username: &str) -> Result<()> {
        let url = self.user_url(username);
        self.request(Method::DELETE, &url, None, false, RequestOptions::new())?;
        Ok(())
    }

    /// Update the properties of a device
    pub fn update_device(
        &self,
        username: &str,
        handle: &str,
        properties: &Properties,
    ) -> Result<Value> {
        let url = self.device_url(username, handle);
        let body = Value::Object(properties.clone());
        self.request(Method::POST, &url, Some(&body), true, RequestOptions::new())?
            .json()
    }

    /// Start registering a new device
    pub fn register_begin(
        &self,
        username: &str,
        properties: Option<&Properties>,
        challenge: Option<&str>,
    ) -> Result<Value> {
        let url = self.ceremony_url(username, "register");
        let options = begin_options(properties, challenge, &[])?;
        self.get_json(&url, options)
    }

    /// Complete a device registration
    ///
    /// `register_response` is the JSON text produced by the U2F device.
    pub fn register_complete(
        &self,
        username: &str,
        register_response: &str,
        properties: Option<&Properties>,
    ) -> Result<Value> {
        let url = self.ceremony_url(username, "register");
        let body = complete_body("registerResponse", register_response, properties)?;
        self.request(Method::POST, &url, Some(&body), true, RequestOptions::new())?
            .json()
    }

    /// Remove a device
    pub fn unregister(&self, username: &str, handle: &str) -> Result<()> {
        let url = self.device_url(username, handle);
        self.request(Method::DELETE, &url, None, false, RequestOptions::new())?;
        Ok(())
    }

    /// Start authenticating, optionally restricted to some device handles
    pub fn auth_begin(
        &self,
        username: &str,
        properties: Option<&Properties>,
        challenge: Option<&str>,
        handles: &[&str],
    ) -> Result<Value> {
        let url = self.ceremony_url(username, "sign");
        let options = begin_options(properties, challenge, handles)?;
        self.get_json(&url, options)
    }

    /// Complete an authentication
    ///
    /// `sign_response` is the JSON text produced by the U2F device.
    pub fn auth_complete(
        &self,
        username: &str,
        sign_response: &str,
        properties: Option<&Properties>,
    ) -> Result<Value> {
        let url = self.ceremony_url(username, "sign");
        let body = complete_body("signResponse", sign_response, properties)?;
        self.request(Method::POST, &url, Some(&body), true, RequestOptions::new())?
            .json()
    }

    fn get_json(&self, url: &str, options: RequestOptions) -> Result<Value> {
        self.request(Method::GET, url, None, true, options)?.json()
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}{username}/", self.endpoint())
    }

    fn device_url(&self, username: &str, handle: &str) -> String {
        format!("{}{username}/{handle}", self.endpoint())
    }

    fn ceremony_url(&self, username: &str, ceremony: &str) -> String {
        format!("{}{username}/{ceremony}", self.endpoint())
    }
}

/// Query parameters for the begin operations
fn begin_options(
    properties: Option<&Properties>,
    challenge: Option<&str>,
    handles: &[&str],
) -> Result<RequestOptions> {
    let mut options = RequestOptions::new();
    if let Some(properties) = properties {
        options = options.query("properties", serde_json::to_string(properties)?);
    }
    if let Some(challenge) = challenge {
        options = options.query("challenge", challenge);
    }
    for handle in handles {
        options = options.query("handle", *handle);
    }
    Ok(options)
}

/// Body for the complete operations; the device response is parsed first
fn complete_body(key: &str, response: &str, properties: Option<&Properties>) -> Result<Value> {
    let mut body = Map::new();
    body.insert(key.to_string(), serde_json::from_str(response)?);
    if let Some(properties) = properties.filter(|p| !p.is_empty()) {
        body.insert("properties".to_string(), Value::Object(properties.clone()));
    }
    Ok(Value::Object(body))
}
