//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// U2FVAL client CLI
#[derive(Parser, Debug)]
#[command(name = "u2fval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the U2FVAL server
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API token sent as a Bearer token
    #[arg(long, global = true, conflicts_with = "username")]
    pub api_token: Option<String>,

    /// Username for HTTP Basic auth
    #[arg(long, global = true, requires = "password")]
    pub username: Option<String>,

    /// Password for HTTP Basic auth
    #[arg(long, global = true, requires = "username")]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the trusted facets
    Facets,

    /// List the devices of a user
    ListDevices {
        /// User name
        user: String,
    },

    /// Show a single device
    GetDevice {
        /// User name
        user: String,
        /// Device handle
        handle: String,
    },

    /// Fetch the attestation certificate of a device
    Certificate {
        /// User name
        user: String,
        /// Device handle
        handle: String,

        /// Write the certificate to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a user and all their devices
    DeleteUser {
        /// User name
        user: String,
    },

    /// Update device properties
    UpdateDevice {
        /// User name
        user: String,
        /// Device handle
        handle: String,

        /// Properties as a JSON object
        #[arg(long)]
        properties: String,
    },

    /// Start registering a device
    RegisterBegin {
        /// User name
        user: String,

        /// Properties as a JSON object
        #[arg(long)]
        properties: Option<String>,

        /// Challenge to use instead of a server-generated one
        #[arg(long)]
        challenge: Option<String>,
    },

    /// Complete a device registration
    RegisterComplete {
        /// User name
        user: String,

        /// Register response from the device (JSON)
        #[arg(long)]
        response: String,

        /// Properties as a JSON object
        #[arg(long)]
        properties: Option<String>,
    },

    /// Remove a device
    Unregister {
        /// User name
        user: String,
        /// Device handle
        handle: String,
    },

    /// Start authenticating
    AuthBegin {
        /// User name
        user: String,

        /// Properties as a JSON object
        #[arg(long)]
        properties: Option<String>,

        /// Challenge to use instead of a server-generated one
        #[arg(long)]
        challenge: Option<String>,

        /// Restrict to these device handles (repeatable)
        #[arg(long = "handle")]
        handles: Vec<String>,
    },

    /// Complete an authentication
    AuthComplete {
        /// User name
        user: String,

        /// Sign response from the device (JSON)
        #[arg(long)]
        response: String,

        /// Properties as a JSON object
        #[arg(long)]
        properties: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_auth_begin() {
        let cli = Cli::try_parse_from([
            "u2fval",
            "--endpoint",
            "https://example",
            "auth-begin",
            "black_knight",
            "--handle",
            "h1",
            "--handle",
            "h2",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("https://example"));
        match cli.command {
            Commands::AuthBegin { user, handles, .. } => {
                assert_eq!(user, "black_knight");
                assert_eq!(handles, vec!["h1", "h2"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_username_requires_password() {
        let result = Cli::try_parse_from(["u2fval", "--username", "arthur", "facets"]);
        assert!(result.is_err());
    }
}
