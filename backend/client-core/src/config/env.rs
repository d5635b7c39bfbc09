//! `.env` loading and API key lookup.

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedApiKey};

use std::env::VarError;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const API_KEY_ENV_VAR: &str = "MDBLIST_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "MDBLIST_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "MDBLIST_TIMEOUT_SECS";

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to loaded .env file, if found.
    pub path: Option<PathBuf>,
    /// Whether any .env file was loaded.
    pub loaded: bool,
}

/// Load .env from the current directory, falling back to the executable's directory.
///
/// Variables already set in the process environment are not overwritten.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    debug!("No .env file found");
    EnvLoadResult {
        path: None,
        loaded: false,
    }
}

/// Resolve the API key from an explicit value or `MDBLIST_API_KEY`.
///
/// A missing key yields an empty [`RedactedApiKey`]; the client rejects it
/// when it is built.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if the variable is not valid unicode.
pub fn resolve_api_key(explicit: Option<String>) -> Result<RedactedApiKey, ConfigError> {
    resolve_api_key_from(explicit, |name| std::env::var(name))
}

/// Same as [`resolve_api_key`] with an explicit variable lookup.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if the variable is not valid unicode.
pub fn resolve_api_key_from<F>(
    explicit: Option<String>,
    lookup: F,
) -> Result<RedactedApiKey, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    if let Some(key) = explicit.filter(|k| !k.trim().is_empty()) {
        debug!("Using API key from command line ({} chars)", key.len());
        return Ok(RedactedApiKey::new(key));
    }

    match lookup(API_KEY_ENV_VAR) {
        Ok(key) => {
            debug!("Using API key from {API_KEY_ENV_VAR} ({} chars)", key.len());
            Ok(RedactedApiKey::new(key))
        }
        Err(VarError::NotPresent) => {
            debug!("No {API_KEY_ENV_VAR} env var found");
            Ok(RedactedApiKey::new(String::new()))
        }
        Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvVar {
            location: ErrorLocation::from(Location::caller()),
            name: API_KEY_ENV_VAR.to_string(),
            reason: String::from("contains invalid unicode"),
        }),
    }
}
