use client_core::config::{API_KEY_ENV_VAR, ClientConfig, resolve_api_key};
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies that config parse errors name the file and keep the location.
///
/// **WHY THIS MATTERS**: Users edit config.json by hand. The error must say which file is
/// broken.
///
/// **BUG THIS CATCHES**: Would catch the path being dropped from the Display format.
#[test]
#[track_caller]
fn given_parse_error_when_formatted_then_includes_path_and_location() {
    // GIVEN: A parse error with location
    let err = ConfigError::ParseError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/home/someone/.config/mdblist/config.json"),
        reason: "expected value at line 1 column 1".to_string(),
    };

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, path, reason, and file location
    assert!(error_string.contains("Config Parse Error"));
    assert!(error_string.contains("mdblist/config.json"));
    assert!(error_string.contains("line 1 column 1"));
    assert!(error_string.contains("config.rs"));
}

#[test]
fn given_config_path_is_directory_when_loaded_then_read_error() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::create_dir(dir.path().join("config.json")).expect("create dir");

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

/// **VALUE**: Verifies that the real process environment is consulted for the API key.
///
/// **WHY THIS MATTERS**: `MDBLIST_API_KEY` is the documented way to configure the CLI.
///
/// **BUG THIS CATCHES**: Would catch the variable name drifting from the documented one.
#[test]
#[serial]
fn given_env_api_key_when_resolved_then_key_loaded() {
    // GIVEN: The key set in the process environment
    // SAFETY: serialized with every other test that touches the environment
    unsafe { std::env::set_var(API_KEY_ENV_VAR, "env-key") };

    // WHEN: Resolving without an explicit key
    let key = resolve_api_key(None);

    // THEN: The environment value is used
    unsafe { std::env::remove_var(API_KEY_ENV_VAR) };
    assert_eq!(key.expect("key").as_str(), "env-key");
}

#[test]
#[serial]
fn given_env_overrides_when_applied_from_process_then_config_updated() {
    // SAFETY: serialized with every other test that touches the environment
    unsafe {
        std::env::set_var("MDBLIST_BASE_URL", "http://127.0.0.1:9");
        std::env::set_var("MDBLIST_TIMEOUT_SECS", "7");
    }

    let mut config = ClientConfig::default();
    let result = config.apply_env();

    unsafe {
        std::env::remove_var("MDBLIST_BASE_URL");
        std::env::remove_var("MDBLIST_TIMEOUT_SECS");
    }
    assert!(result.is_ok());
    assert_eq!(config.base_url, "http://127.0.0.1:9");
    assert_eq!(config.timeout_secs, 7);
}
