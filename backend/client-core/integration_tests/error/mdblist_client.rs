use client_core::MdblistClient;
use client_core::error::MdblistClientError;

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};
use models::ModifyListRequest;

use std::panic::Location;

/// **VALUE**: Verifies that `MdblistClientError::Api` shows status, body and location.
///
/// **WHY THIS MATTERS**: The CLI prints this error as-is. Users need the status and the
/// service's own message; developers need the call site.
///
/// **BUG THIS CATCHES**: Would catch the Display format dropping any of the three parts.
#[test]
#[track_caller]
fn given_api_error_when_formatted_then_includes_status_body_and_location() {
    // GIVEN: An API error with location
    let err = MdblistClientError::Api {
        status_code: HttpStatusCode(404),
        body: "List not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, status, body, and file location
    assert!(error_string.contains("API Error: HTTP 404"));
    assert!(error_string.contains("List not found"));
    assert!(error_string.contains("mdblist_client.rs"));
}

/// **VALUE**: Verifies that `#[track_caller]` helpers record the caller, not the helper.
///
/// **WHY THIS MATTERS**: Validation errors are raised deep in path resolution. Pointing at
/// the helper's own file would make every error look like it came from one place.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being removed from `validation()`.
#[test]
fn given_validation_helper_when_called_then_location_is_call_site() {
    let err = MdblistClientError::validation("missing id");

    match err {
        MdblistClientError::Validation { message, location } => {
            assert_eq!(message, "missing id");
            assert!(location.file.contains("integration_tests"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_blank_api_key_when_client_built_then_configuration_error() {
    let blank = MdblistClient::new(RedactedApiKey::new("  "));
    let missing = MdblistClient::builder().build();

    for result in [blank, missing] {
        let err = result.expect_err("client without key must not build");
        assert!(matches!(err, MdblistClientError::Configuration { .. }));
        assert!(err.to_string().contains("MDBLIST_API_KEY"));
    }
}

#[test]
fn given_non_http_base_url_when_client_built_then_configuration_error() {
    let result = MdblistClient::builder()
        .with_api_key(RedactedApiKey::new("abc123"))
        .with_base_url("mailto:someone@example.com")
        .build();

    assert!(matches!(
        result,
        Err(MdblistClientError::Configuration { .. })
    ));
}

#[test]
fn given_empty_modify_builder_when_converted_then_validation_error() {
    let model_err = ModifyListRequest::builder()
        .build()
        .expect_err("empty builder must fail");

    let err = MdblistClientError::from(model_err);

    assert!(err.is_validation());
    assert!(err.to_string().contains("at least one movie or show ID"));
}

/// **VALUE**: Verifies that the client's Debug output never reveals the API key.
///
/// **WHY THIS MATTERS**: Clients end up in debug logs and panic messages.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug on the key wrapper.
#[test]
fn given_client_when_debug_formatted_then_key_hidden() {
    let client = MdblistClient::new(RedactedApiKey::new("super-secret-key")).expect("client");

    let debug = format!("{client:?}");

    assert!(!debug.contains("super-secret-key"));
}
