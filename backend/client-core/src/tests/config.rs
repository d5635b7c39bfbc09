use crate::MDBLIST_API_BASE_URL;
use crate::config::{API_KEY_ENV_VAR, ClientConfig, OutputFormat, resolve_api_key_from};
use crate::error::config::ConfigError;

use std::env::VarError;
use std::ffi::OsString;
use std::time::Duration;

use tempfile::TempDir;

fn no_env(_: &str) -> Result<String, VarError> {
    Err(VarError::NotPresent)
}

/// **VALUE**: Verifies that a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First runs have no config directory. The CLI must work with only
/// an API key in the environment.
///
/// **BUG THIS CATCHES**: Would catch `load` failing with a read error on a missing file.
#[test]
fn given_missing_config_file_when_loaded_then_defaults() {
    // GIVEN: An empty config directory
    let dir = TempDir::new().expect("temp dir");

    // WHEN: Loading
    let config = ClientConfig::load(dir.path()).expect("defaults should load");

    // THEN: Defaults point at the public API
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, MDBLIST_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn given_partial_config_file_when_loaded_then_missing_fields_default() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"timeout_secs": 10, "output": "yaml"}"#,
    )
    .expect("write config");

    let config = ClientConfig::load(dir.path()).expect("config should load");

    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.output, OutputFormat::Yaml);
    assert_eq!(config.base_url, MDBLIST_API_BASE_URL);
    assert_eq!(config.version, 1);
}

#[test]
fn given_malformed_config_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").expect("write config");

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies that out-of-range values are rejected by `validate`.
///
/// **WHY THIS MATTERS**: A zero timeout makes every request fail immediately with a
/// confusing transport error. A non-http base URL cannot be requested at all.
///
/// **BUG THIS CATCHES**: Would catch a range check going missing from `validate`.
#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let zero_timeout = ClientConfig {
        timeout_secs: 0,
        ..ClientConfig::default()
    };
    let ftp_base = ClientConfig {
        base_url: "ftp://api.mdblist.com".to_string(),
        ..ClientConfig::default()
    };
    let future_version = ClientConfig {
        version: 2,
        ..ClientConfig::default()
    };

    for config in [zero_timeout, ftp_base, future_version] {
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

}

/// **VALUE**: Verifies that `load` leaves validation to the caller.
///
/// **WHY THIS MATTERS**: An env variable or `--timeout` flag may replace a bad file value.
/// Rejecting the file before the merge would make the override useless.
///
/// **BUG THIS CATCHES**: Would catch `load` validating before overrides are applied.
#[test]
fn given_invalid_file_value_when_loaded_then_override_can_fix_it() {
    // GIVEN: A config file with a zero timeout
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), r#"{"timeout_secs": 0}"#)
        .expect("write config");

    // WHEN: Loading it, then applying an env override
    let mut config = ClientConfig::load(dir.path()).expect("load should not validate");
    let before_override = config.validate();
    config
        .apply_env_from(|name| match name {
            "MDBLIST_TIMEOUT_SECS" => Ok("30".to_string()),
            _ => Err(VarError::NotPresent),
        })
        .expect("override should apply");

    // THEN: Invalid before the merge, valid after
    assert!(matches!(
        before_override,
        Err(ConfigError::ValidationError { .. })
    ));
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn given_env_overrides_when_applied_then_fields_replaced() {
    let mut config = ClientConfig::default();

    config
        .apply_env_from(|name| match name {
            "MDBLIST_BASE_URL" => Ok("http://localhost:9000".to_string()),
            "MDBLIST_TIMEOUT_SECS" => Ok(" 5 ".to_string()),
            _ => Err(VarError::NotPresent),
        })
        .expect("overrides should apply");

    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn given_non_numeric_timeout_env_when_applied_then_env_var_error() {
    let mut config = ClientConfig::default();

    let result = config.apply_env_from(|name| match name {
        "MDBLIST_TIMEOUT_SECS" => Ok("soon".to_string()),
        _ => Err(VarError::NotPresent),
    });

    match result {
        Err(ConfigError::EnvVar { name, reason, .. }) => {
            assert_eq!(name, "MDBLIST_TIMEOUT_SECS");
            assert!(reason.contains("soon"));
        }
        other => panic!("expected EnvVar error, got {other:?}"),
    }
}

/// **VALUE**: Verifies API key precedence: explicit value first, then the environment.
///
/// **WHY THIS MATTERS**: `--api-key` must override a key left in a shell profile.
///
/// **BUG THIS CATCHES**: Would catch the environment shadowing the command line.
#[test]
fn given_explicit_and_env_key_when_resolved_then_explicit_wins() {
    let env = |name: &str| {
        assert_eq!(name, API_KEY_ENV_VAR);
        Ok("from-env".to_string())
    };

    let explicit = resolve_api_key_from(Some("from-flag".to_string()), env).expect("key");
    let fallback = resolve_api_key_from(Some("   ".to_string()), env).expect("key");

    assert_eq!(explicit.as_str(), "from-flag");
    assert_eq!(fallback.as_str(), "from-env");
}

#[test]
fn given_no_key_anywhere_when_resolved_then_blank_key() {
    let key = resolve_api_key_from(None, no_env).expect("missing key is not an error here");

    assert!(key.is_blank());
}

#[test]
fn given_non_unicode_env_key_when_resolved_then_env_var_error() {
    let result = resolve_api_key_from(None, |_| {
        Err(VarError::NotUnicode(OsString::from("bad")))
    });

    assert!(matches!(result, Err(ConfigError::EnvVar { .. })));
}
