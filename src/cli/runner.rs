//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::Properties;
use crate::config::{AuthConfig, ClientConfig};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!("Using U2FVAL endpoint {}", config.endpoint);
        let client = config.build_client()?;

        match &self.cli.command {
            Commands::Facets => print_json(&client.get_trusted_facets()?),
            Commands::ListDevices { user } => print_json(&client.list_devices(user)?),
            Commands::GetDevice { user, handle } => print_json(&client.get_device(user, handle)?),
            Commands::Certificate {
                user,
                handle,
                output,
            } => {
                let cert = client.get_certificate(user, handle)?;
                match output {
                    Some(path) => {
                        fs::write(path, &cert)?;
                        info!("Wrote {} bytes to {}", cert.len(), path.display());
                    }
                    None => {
                        let mut stdout = std::io::stdout().lock();
                        stdout.write_all(&cert)?;
                        stdout.flush()?;
                    }
                }
                Ok(())
            }
            Commands::DeleteUser { user } => {
                client.delete_user(user)?;
                info!("Deleted user {}", user);
                Ok(())
            }
            Commands::UpdateDevice {
                user,
                handle,
                properties,
            } => {
                let properties = parse_properties(properties)?;
                print_json(&client.update_device(user, handle, &properties)?)
            }
            Commands::RegisterBegin {
                user,
                properties,
                challenge,
            } => {
                let properties = properties.as_deref().map(parse_properties).transpose()?;
                print_json(&client.register_begin(
                    user,
                    properties.as_ref(),
                    challenge.as_deref(),
                )?)
            }
            Commands::RegisterComplete {
                user,
                response,
                properties,
            } => {
                let properties = properties.as_deref().map(parse_properties).transpose()?;
                print_json(&client.register_complete(user, response, properties.as_ref())?)
            }
            Commands::Unregister { user, handle } => {
                client.unregister(user, handle)?;
                info!("Removed device {} of user {}", handle, user);
                Ok(())
            }
            Commands::AuthBegin {
                user,
                properties,
                challenge,
                handles,
            } => {
                let properties = properties.as_deref().map(parse_properties).transpose()?;
                let handles: Vec<&str> = handles.iter().map(String::as_str).collect();
                print_json(&client.auth_begin(
                    user,
                    properties.as_ref(),
                    challenge.as_deref(),
                    &handles,
                )?)
            }
            Commands::AuthComplete {
                user,
                response,
                properties,
            } => {
                let properties = properties.as_deref().map(parse_properties).transpose()?;
                print_json(&client.auth_complete(user, response, properties.as_ref())?)
            }
        }
    }

    /// Build the client config from the config file and command-line flags
    ///
    /// Flags override values from the file.
    fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.cli.config, &self.cli.endpoint) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(endpoint)) => ClientConfig::new(endpoint.clone()),
            (None, None) => {
                return Err(Error::config(
                    "No endpoint given (use --endpoint or --config)",
                ))
            }
        };

        if let Some(ref endpoint) = self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }

        if let Some(ref token) = self.cli.api_token {
            config.auth = AuthConfig::Token {
                token: token.clone(),
            };
        } else if let (Some(username), Some(password)) = (&self.cli.username, &self.cli.password) {
            config.auth = AuthConfig::Basic {
                username: username.clone(),
                password: password.clone(),
            };
        }

        if self.cli.timeout.is_some() {
            config.timeout_seconds = self.cli.timeout;
        }

        Ok(config)
    }
}

/// Parse a JSON object given on the command line
fn parse_properties(raw: &str) -> Result<Properties> {
    match serde_json::from_str(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::config(format!(
            "properties must be a JSON object, got: {other}"
        ))),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
