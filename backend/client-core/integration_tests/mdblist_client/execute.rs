use crate::helpers::{TEST_API_KEY, client_for};

use client_core::error::MdblistClientError;
use client_core::{ApiPath, HttpMethod, QueryParams};

use common::HttpStatusCode;
use models::{ModifyListRequest, MyLimits};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies that every request carries the configured API key as the last
/// query parameter.
///
/// **WHY THIS MATTERS**: MDBList authenticates only through the `apikey` query parameter.
/// A request without it returns 401 and still counts against the caller's quota.
///
/// **BUG THIS CATCHES**: Would catch the key being dropped, renamed, or sent before the
/// caller's own parameters.
#[tokio::test]
async fn given_query_params_when_executed_then_api_key_is_sent_last() {
    // GIVEN: A mock that only answers when the key is present
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "matrix"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"search": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Executing a search with a caller parameter
    let result: Value = client
        .execute(
            HttpMethod::Get,
            &ApiPath::from("/search/movie"),
            &QueryParams::new().with("query", "matrix"),
            None::<&()>,
        )
        .await
        .expect("request should succeed");

    // THEN: The mock matched and the key is the final pair
    assert_eq!(result["total"], 0);
    let requests = server.received_requests().await.expect("recording enabled");
    let last_pair = requests[0]
        .url
        .query_pairs()
        .last()
        .map(|(k, v)| (k.into_owned(), v.into_owned()));
    assert_eq!(
        last_pair,
        Some(("apikey".to_string(), TEST_API_KEY.to_string()))
    );
}

/// **VALUE**: Verifies that JSON headers are sent and the body is serialized as JSON.
///
/// **WHY THIS MATTERS**: The write endpoints reject bodies without a JSON content type.
///
/// **BUG THIS CATCHES**: Would catch the Content-Type header or body encoding going missing.
#[tokio::test]
async fn given_body_when_executed_then_json_headers_and_payload_sent() {
    // GIVEN: A mock expecting a JSON body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists/42/items/add"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"movies": [{"tmdb": 603}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let body = ModifyListRequest::builder()
        .with_movie_tmdb_ids([603])
        .build()
        .expect("request should build");

    // WHEN: Executing without caring about the response
    let result = client
        .execute_unit(
            HttpMethod::Post,
            &ApiPath::from("/lists/42/items/add"),
            &QueryParams::new(),
            Some(&body),
        )
        .await;

    // THEN: Success, and the mock verifies the request on drop
    assert!(result.is_ok(), "unexpected error: {result:?}");
}

/// **VALUE**: Verifies that a 4xx response surfaces the exact status and raw body.
///
/// **WHY THIS MATTERS**: MDBList explains failures in the body ("Invalid API key", "List
/// not found"). Users need that text; a parsed or truncated body hides it.
///
/// **BUG THIS CATCHES**: Would catch the body being dropped or the status being mapped to
/// a generic error.
#[tokio::test]
async fn given_client_error_status_when_executed_then_api_error_with_raw_body() {
    // GIVEN: The service rejects the key
    let server = MockServer::start().await;
    let raw = r#"{"error": "Invalid API key!"}"#;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string(raw))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Requesting limits
    let err = client
        .execute::<MyLimits, ()>(HttpMethod::Get, &ApiPath::from("/user"), &QueryParams::new(), None)
        .await
        .expect_err("401 must be an error");

    // THEN: Status and body are preserved verbatim
    assert_eq!(err.status_code(), Some(HttpStatusCode(401)));
    assert_eq!(err.raw_body(), Some(raw));
    assert!(err.to_string().contains("API Error: HTTP 401"));
}

#[tokio::test]
async fn given_server_error_with_text_body_when_executed_then_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/top"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .execute::<Value, ()>(HttpMethod::Get, &ApiPath::from("/lists/top"), &QueryParams::new(), None)
        .await
        .expect_err("503 must be an error");

    match err {
        MdblistClientError::Api {
            status_code, body, ..
        } => {
            assert!(status_code.is_server_error());
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that error bodies are read as UTF-8 regardless of the charset header.
///
/// **WHY THIS MATTERS**: A proxy that labels a UTF-8 body as latin-1 would otherwise turn
/// `é` into `Ã©` in the message shown to the user.
///
/// **BUG THIS CATCHES**: Would catch the body being transcoded through the response charset.
#[tokio::test]
async fn given_mislabeled_charset_when_executed_then_body_kept_as_utf8() {
    // GIVEN: A 400 whose UTF-8 body claims to be latin-1
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_raw("liste déjà supprimée".as_bytes(), "text/plain; charset=iso-8859-1"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Executing
    let err = client.get_my_limits().await.expect_err("400 must be an error");

    // THEN: The body is the original text
    assert_eq!(err.raw_body(), Some("liste déjà supprimée"));
}

/// **VALUE**: Verifies that invalid UTF-8 in a body is replaced, not fatal.
///
/// **BUG THIS CATCHES**: Would catch a strict UTF-8 read turning an API error into a
/// transport error and losing the status code.
#[tokio::test]
async fn given_invalid_utf8_body_when_executed_then_api_error_with_replacement_chars() {
    // GIVEN: A 502 with a stray latin-1 byte
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(502).set_body_raw(
            b"bad gateway \xff".to_vec(),
            "text/plain",
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Executing
    let err = client.get_my_limits().await.expect_err("502 must be an error");

    // THEN: Status kept, invalid byte replaced
    assert_eq!(err.status_code(), Some(HttpStatusCode::from(502)));
    assert_eq!(err.raw_body(), Some("bad gateway \u{FFFD}"));
}

/// **VALUE**: Verifies that fields the client does not model are ignored.
///
/// **WHY THIS MATTERS**: MDBList adds response fields without notice. A strict decoder
/// would break every user on the day a field is added.
///
/// **BUG THIS CATCHES**: Would catch `deny_unknown_fields` creeping into a record.
#[tokio::test]
async fn given_unknown_fields_when_decoded_then_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "api_requests": 1000,
            "api_requests_count": 12,
            "user_id": 7,
            "patron_status": null,
            "brand_new_field": {"nested": true}
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let limits = client.get_my_limits().await.expect("limits should decode");

    assert_eq!(limits.api_requests, 1000);
    assert_eq!(limits.api_requests_count, 12);
    assert_eq!(limits.user_id, 7);
    assert_eq!(limits.patron_status, "");
}

/// **VALUE**: Verifies that an unparseable 2xx body becomes a decode error carrying the body.
///
/// **WHY THIS MATTERS**: Maintenance pages and proxies answer 200 with HTML. Reporting the
/// raw body tells the user what actually came back.
///
/// **BUG THIS CATCHES**: Would catch the body being discarded on decode failure.
#[tokio::test]
async fn given_malformed_json_when_decoded_then_decode_error_keeps_body() {
    // GIVEN: A 200 with HTML
    let server = MockServer::start().await;
    let raw = "<html>maintenance</html>";
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Decoding into a typed record
    let err = client.get_my_limits().await.expect_err("HTML must not decode");

    // THEN: Decode error with the original body
    assert!(matches!(err, MdblistClientError::Decode { .. }));
    assert_eq!(err.raw_body(), Some(raw));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn given_stopped_server_when_executed_then_transport_error() {
    // GIVEN: A client pointed at a server that is no longer listening
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    // WHEN: Executing any request
    let err = client
        .execute::<Value, ()>(HttpMethod::Get, &ApiPath::from("/user"), &QueryParams::new(), None)
        .await
        .expect_err("connection must fail");

    // THEN: Transport error, no status, and the key is not echoed from the URL
    assert!(matches!(err, MdblistClientError::Transport { .. }));
    assert_eq!(err.status_code(), None);
    assert!(!err.to_string().contains(TEST_API_KEY));
}
