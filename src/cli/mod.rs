//! CLI module
//!
//! Command-line interface to a U2FVAL server.
//!
//! # Commands
//!
//! - `facets` - Show trusted facets
//! - `list-devices`, `get-device`, `certificate` - Inspect devices
//! - `update-device`, `unregister`, `delete-user` - Manage devices and users
//! - `register-begin`, `register-complete` - Registration ceremony
//! - `auth-begin`, `auth-complete` - Authentication ceremony

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
