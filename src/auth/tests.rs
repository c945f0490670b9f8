//! Tests for the auth module

use super::*;
use crate::http::RequestOptions;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_no_auth() {
    let auth = AuthStrategy::None;
    assert_eq!(auth.apply(RequestOptions::new()), RequestOptions::new());

    let options = RequestOptions::new().header("foo", "bar");
    assert_eq!(auth.apply(options.clone()), options);
}

#[test]
fn test_default_is_no_auth() {
    assert_eq!(AuthStrategy::default(), AuthStrategy::None);
}

#[test]
fn test_api_token_headers_empty() {
    let auth = AuthStrategy::api_token("abc123");
    let options = auth.apply(RequestOptions::new());

    assert_eq!(
        options.headers,
        headers(&[("Authorization", "Bearer abc123")])
    );
    assert!(options.credentials.is_none());
}

#[test]
fn test_api_token_headers_present() {
    let auth = AuthStrategy::api_token("abc123");
    let options = auth.apply(RequestOptions::new().header("foo", "bar"));

    assert_eq!(
        options.headers,
        headers(&[("Authorization", "Bearer abc123"), ("foo", "bar")])
    );
}

#[test]
fn test_api_token_last_applied_wins() {
    let first = AuthStrategy::api_token("first");
    let second = AuthStrategy::api_token("second");

    let options = RequestOptions::new().header("X-Trace", "1");
    let options = second.apply(first.apply(options));

    assert_eq!(
        options.headers,
        headers(&[("Authorization", "Bearer second"), ("X-Trace", "1")])
    );
}

#[test]
fn test_api_token_replaces_lowercase_authorization() {
    let auth = AuthStrategy::api_token("new");
    let options = auth.apply(RequestOptions::new().header("authorization", "Bearer old"));

    assert_eq!(options.headers, headers(&[("Authorization", "Bearer new")]));
}

#[test]
fn test_http_auth_without_scheme() {
    let auth = AuthStrategy::http_auth("black_knight", "Just a flesh wound!");
    let options = auth.apply(RequestOptions::new());

    assert_eq!(
        options.credentials,
        Some(Credentials::Basic {
            username: "black_knight".to_string(),
            password: "Just a flesh wound!".to_string(),
        })
    );
    assert!(options.headers.is_empty());
}

#[test]
fn test_http_auth_with_scheme() {
    let scheme: AuthScheme =
        Arc::new(|user, pass| Credentials::header("X-Auth", format!("{user}/{pass}")));
    let auth = AuthStrategy::http_auth_with_scheme("arthur", "camelot", &scheme);
    let options = auth.apply(RequestOptions::new());

    assert_eq!(
        options.credentials,
        Some(Credentials::header("X-Auth", "arthur/camelot"))
    );
}

#[test]
fn test_http_auth_overwrites_credentials() {
    let auth = AuthStrategy::http_auth("new", "pass");
    let options = RequestOptions::new().credentials(Credentials::basic("old", "pass"));

    assert_eq!(
        auth.apply(options).credentials,
        Some(Credentials::basic("new", "pass"))
    );
}

#[test]
fn test_unrelated_fields_preserved() {
    let options = RequestOptions::new()
        .header("X-Request-Id", "abc")
        .query("challenge", "xyz")
        .timeout(Duration::from_secs(5));

    let strategies = [
        AuthStrategy::None,
        AuthStrategy::api_token("token"),
        AuthStrategy::http_auth("user", "pass"),
    ];

    for auth in &strategies {
        let applied = auth.apply(options.clone());
        assert_eq!(applied.headers.get("X-Request-Id"), Some(&"abc".to_string()));
        assert_eq!(applied.query, options.query);
        assert_eq!(applied.timeout, options.timeout);
        assert_eq!(applied.body, options.body);
    }
}

#[test]
fn test_debug_hides_token() {
    let auth = AuthStrategy::api_token("super-secret");
    assert!(!format!("{auth:?}").contains("super-secret"));
}
