use crate::mdblist_client::{ApiPath, MdblistClient, PathTemplate, QueryParams, redact_url};
use crate::API_KEY_QUERY_PARAM;

use common::RedactedApiKey;

fn client_for(base_url: &str) -> MdblistClient {
    MdblistClient::builder()
        .with_base_url(base_url)
        .with_api_key(RedactedApiKey::new("abc123"))
        .build()
        .expect("client should build")
}

/// **VALUE**: Verifies that the API key is always the last query parameter.
///
/// **WHY THIS MATTERS**: The service authenticates by the `apikey` query parameter.
/// If caller parameters came after it, logs and proxies would see a different order
/// than the service expects.
///
/// **BUG THIS CATCHES**: Would catch the credential being prepended or interleaved.
#[test]
fn given_caller_query_when_url_built_then_api_key_is_last() {
    // GIVEN: A client and a search query
    let client = client_for("https://api.mdblist.com");
    let query = QueryParams::new().with("query", "the matrix").with("limit", "5");

    // WHEN: Building the URL
    let url = client
        .build_url(&ApiPath::from("/search/movie"), &query)
        .expect("url should build");

    // THEN: Caller pairs come first, the credential last
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(url.path(), "/search/movie");
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], ("query".to_string(), "the matrix".to_string()));
    assert_eq!(
        pairs.last(),
        Some(&(API_KEY_QUERY_PARAM.to_string(), "abc123".to_string()))
    );
}

/// **VALUE**: Verifies that a caller cannot replace the configured credential.
///
/// **WHY THIS MATTERS**: Query parameters can come from user input. A second `apikey`
/// pair would make the effective credential depend on how the server parses duplicates.
///
/// **BUG THIS CATCHES**: Would catch caller `apikey` pairs being forwarded.
#[test]
fn given_caller_apikey_when_url_built_then_only_configured_key_is_sent() {
    let client = client_for("https://api.mdblist.com");
    let query = QueryParams::new().with(API_KEY_QUERY_PARAM, "stolen");

    let url = client
        .build_url(&ApiPath::from("/user"), &query)
        .expect("url should build");

    let keys: Vec<String> = url
        .query_pairs()
        .filter(|(k, _)| k == API_KEY_QUERY_PARAM)
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(keys, vec!["abc123".to_string()]);
}

#[test]
fn given_base_url_with_path_prefix_when_url_built_then_prefix_is_kept() {
    let client = client_for("http://localhost:8080/proxy/");

    let url = client
        .build_url(&ApiPath::from("/lists/42"), &QueryParams::new())
        .expect("url should build");

    assert_eq!(url.path(), "/proxy/lists/42");
}

/// **VALUE**: Verifies that path values are percent-encoded as whole segments.
///
/// **WHY THIS MATTERS**: Usernames and list names are free text. An unencoded `/` or `?`
/// would change the endpoint or start the query string early.
///
/// **BUG THIS CATCHES**: Would catch string concatenation of raw values into the path.
#[test]
fn given_reserved_characters_in_segment_when_url_built_then_encoded() {
    let client = client_for("https://api.mdblist.com");
    let path = PathTemplate::new("/lists/user/{username}")
        .resolve(&[("username", "a/b?c".to_string())])
        .expect("template should resolve");

    let url = client
        .build_url(&path, &QueryParams::new())
        .expect("url should build");

    assert_eq!(url.path(), "/lists/user/a%2Fb%3Fc");
    assert_eq!(url.query_pairs().count(), 1);
}

#[test]
fn given_url_with_key_when_redacted_then_key_value_is_masked() {
    let client = client_for("https://api.mdblist.com");
    let url = client
        .build_url(&ApiPath::from("/user"), &QueryParams::new().with("a", "1"))
        .expect("url should build");

    let redacted = redact_url(&url);

    assert!(!redacted.contains("abc123"));
    assert!(redacted.contains("a=1"));
    assert!(redacted.contains("apikey=%5BREDACTED%5D"));
}
