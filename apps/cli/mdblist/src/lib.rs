// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::error::MdblistCliError;

use client_core::MdblistClient;
use client_core::config::{ClientConfig, resolve_api_key};

use log::debug;

/// Resolve settings in order: defaults, config file, environment, flags.
///
/// # Errors
///
/// Returns [`MdblistCliError::Config`] if the config file is unreadable or any
/// resulting value is out of range.
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig, MdblistCliError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ClientConfig::default_dir()?,
    };

    let mut config = ClientConfig::load(&config_dir)?;
    config.apply_env()?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(output) = cli.output {
        config.output = output.into();
    }

    config.validate()?;
    debug!(
        "Using {} (timeout {}s, output {:?})",
        config.base_url, config.timeout_secs, config.output
    );

    Ok(config)
}

/// Run one command and return its rendered output.
///
/// # Errors
///
/// Returns [`MdblistCliError`] if configuration, the request, or rendering fails.
pub async fn run(cli: Cli) -> Result<String, MdblistCliError> {
    let config = resolve_config(&cli)?;
    let api_key = resolve_api_key(cli.api_key.clone())?;
    let client = MdblistClient::from_config(&config, api_key)?;

    commands::execute(&client, &cli.command, config.output).await
}
