use mdblist::cli::Cli;
use mdblist::error::MdblistCliError;
use mdblist::{resolve_config, run};

use client_core::config::OutputFormat;

use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Parse a command line pointed at `server`, with an isolated config directory.
fn cli_for(server: &MockServer, config_dir: &TempDir, args: &[&str]) -> Cli {
    let base_url = server.uri();
    let config_dir = config_dir.path().display().to_string();
    let mut argv = vec![
        "mdblist",
        "--api-key",
        "abc123",
        "--base-url",
        base_url.as_str(),
        "--config-dir",
        config_dir.as_str(),
    ];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

/// **VALUE**: End-to-end `get my-lists` from argument parsing to rendered JSON.
///
/// **WHY THIS MATTERS**: This is the path every invocation takes: config, key, client,
/// request, decode, render.
///
/// **BUG THIS CATCHES**: Would catch any layer dropping the key or the render format.
#[tokio::test]
async fn given_my_lists_command_when_run_then_rendered_json() {
    // GIVEN: The service has one list for key abc123
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/user"))
        .and(query_param("apikey", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Favorites", "mediatype": "movie"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    // WHEN: Running the command
    let rendered = run(cli_for(&server, &config_dir, &["get", "my-lists"]))
        .await
        .expect("command should succeed");

    // THEN: Pretty JSON with the list
    let value: Value = serde_json::from_str(&rendered).expect("output is JSON");
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["name"], "Favorites");
}

#[tokio::test]
async fn given_yaml_flag_when_run_then_rendered_yaml() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "api_requests": 1000, "api_requests_count": 3, "user_id": 7
        })))
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    let rendered = run(cli_for(&server, &config_dir, &["get", "my-limits", "-o", "yaml"]))
        .await
        .expect("command should succeed");

    assert!(rendered.contains("api_requests: 1000"));
    assert!(rendered.contains("user_id: 7"));
}

/// **VALUE**: Verifies that the output format from config.json is used when no flag is given.
///
/// **WHY THIS MATTERS**: Users who prefer YAML set it once instead of on every call.
///
/// **BUG THIS CATCHES**: Would catch the flag default overriding the config file.
#[test]
fn given_yaml_in_config_file_when_resolved_then_yaml_used() {
    let config_dir = TempDir::new().expect("temp dir");
    std::fs::write(config_dir.path().join("config.json"), r#"{"output": "yaml"}"#)
        .expect("write config");
    let dir = config_dir.path().display().to_string();

    let from_file = Cli::try_parse_from(["mdblist", "--config-dir", dir.as_str(), "get", "top-lists"])
        .expect("arguments should parse");
    let from_flag = Cli::try_parse_from([
        "mdblist", "--config-dir", dir.as_str(), "-o", "json", "get", "top-lists",
    ])
    .expect("arguments should parse");

    assert_eq!(resolve_config(&from_file).expect("config").output, OutputFormat::Yaml);
    assert_eq!(resolve_config(&from_flag).expect("config").output, OutputFormat::Json);
}

#[test]
fn given_zero_timeout_flag_when_resolved_then_config_error() {
    let config_dir = TempDir::new().expect("temp dir");
    let dir = config_dir.path().display().to_string();
    let cli = Cli::try_parse_from([
        "mdblist", "--config-dir", dir.as_str(), "--timeout", "0", "get", "my-limits",
    ])
    .expect("arguments should parse");

    let result = resolve_config(&cli);

    assert!(matches!(result, Err(MdblistCliError::Config { .. })));
}

/// **VALUE**: Verifies a flag can replace an out-of-range value from the config file.
///
/// **WHY THIS MATTERS**: Flags have the highest precedence. A stale config file must not
/// block a user who passes a valid `--timeout`.
///
/// **BUG THIS CATCHES**: Would catch the file being validated before overrides are merged.
#[test]
fn given_zero_timeout_in_file_and_valid_flag_when_resolved_then_flag_wins() {
    // GIVEN: A config file with a zero timeout and a valid --timeout flag
    let config_dir = TempDir::new().expect("temp dir");
    std::fs::write(config_dir.path().join("config.json"), r#"{"timeout_secs": 0}"#)
        .expect("write config");
    let dir = config_dir.path().display().to_string();
    let cli = Cli::try_parse_from([
        "mdblist", "--config-dir", dir.as_str(), "--timeout", "30", "get", "my-limits",
    ])
    .expect("arguments should parse");

    // WHEN: Resolving the config
    let config = resolve_config(&cli).expect("flag should fix the file value");

    // THEN: The flag value is used
    assert_eq!(config.timeout_secs, 30);
}

/// **VALUE**: Verifies that an incomplete list selector fails before any request.
///
/// **WHY THIS MATTERS**: Without an ID or a full name pair the request would go to the
/// wrong endpoint and still cost quota.
///
/// **BUG THIS CATCHES**: Would catch selector validation moving after the request.
#[tokio::test]
async fn given_list_without_selector_when_run_then_validation_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    let err = run(cli_for(&server, &config_dir, &["get", "list", "--username", "someone"]))
        .await
        .expect_err("incomplete selector must fail");

    assert!(err.is_validation());
    assert!(
        err.to_string()
            .contains("either --id or both --username and --listname are required")
    );
}

#[tokio::test]
async fn given_blank_search_query_when_run_then_validation_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    let err = run(cli_for(&server, &config_dir, &["search", "lists", "-q", " "]))
        .await
        .expect_err("blank query must fail");

    assert!(matches!(err, MdblistCliError::Cli { .. }));
}

#[tokio::test]
async fn given_update_list_items_when_run_then_counts_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists/42/items/add"))
        .and(body_json(json!({"movies": [{"tmdb": 603}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "added": {"movies": 1, "shows": 0},
            "existing": {"movies": 0, "shows": 0},
            "not_found": {"movies": 0, "shows": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    let rendered = run(cli_for(
        &server,
        &config_dir,
        &["update", "list-items", "-i", "42", "-a", "add", "--movie-tmdb", "603"],
    ))
    .await
    .expect("command should succeed");

    let value: Value = serde_json::from_str(&rendered).expect("output is JSON");
    assert_eq!(value["added"]["movies"], 1);
}

#[tokio::test]
async fn given_zero_list_id_when_updating_items_then_cli_error() {
    let server = MockServer::start().await;
    let config_dir = TempDir::new().expect("temp dir");

    let err = run(cli_for(
        &server,
        &config_dir,
        &["update", "list-items", "-i", "0", "-a", "remove", "--movie-tmdb", "603"],
    ))
    .await
    .expect_err("id 0 must fail");

    assert!(err.to_string().contains("--id is required"));
}

/// **VALUE**: Verifies that service errors reach the user with status and body.
///
/// **WHY THIS MATTERS**: "Invalid API key" from the service is the most common failure
/// and must be visible in the exit message.
///
/// **BUG THIS CATCHES**: Would catch the CLI replacing the core error with a generic one.
#[tokio::test]
async fn given_unauthorized_response_when_run_then_core_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/top"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key!"))
        .mount(&server)
        .await;
    let config_dir = TempDir::new().expect("temp dir");

    let err = run(cli_for(&server, &config_dir, &["get", "top-lists"]))
        .await
        .expect_err("401 must fail");

    assert!(matches!(err, MdblistCliError::Core { .. }));
    let message = err.to_string();
    assert!(message.contains("HTTP 401"));
    assert!(message.contains("Invalid API key!"));
}
