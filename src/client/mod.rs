//! U2FVAL client
//!
//! One method per remote operation. Each builds its URL from the
//! normalized endpoint, optionally serializes a JSON body, and hands off to
//! [`Client::request`], which interprets the HTTP status and body.

mod api;
mod operations;

pub use api::{Client, Payload};
pub use operations::Properties;
