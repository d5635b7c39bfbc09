use client_core::error::{ConfigError, MdblistClientError};
use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced to the terminal.
///
/// Each variant carries the location where the failure entered the CLI layer.
#[derive(Debug, Error)]
pub enum MdblistCliError {
    /// Invalid command-line input not caught by argument parsing
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Error from the request core (validation, transport, API status, decoding)
    #[error("Core Error: {source} {location}")]
    Core {
        location: ErrorLocation,
        #[source]
        source: MdblistClientError,
    },

    #[error("Config Error: {source} {location}")]
    Config {
        location: ErrorLocation,
        #[source]
        source: ConfigError,
    },

    /// Response could not be rendered
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl MdblistCliError {
    /// True for input problems detected before any request was sent.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Cli { .. } => true,
            Self::Core { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

impl From<MdblistClientError> for MdblistCliError {
    #[track_caller]
    fn from(source: MdblistClientError) -> Self {
        MdblistCliError::Core {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<ConfigError> for MdblistCliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        MdblistCliError::Config {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for MdblistCliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        MdblistCliError::Output {
            message: format!("JSON rendering failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_yaml::Error> for MdblistCliError {
    #[track_caller]
    fn from(error: serde_yaml::Error) -> Self {
        MdblistCliError::Output {
            message: format!("YAML rendering failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
