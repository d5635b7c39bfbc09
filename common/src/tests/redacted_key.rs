use crate::RedactedApiKey;

/// **VALUE**: Verifies the key value never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: The client is logged with `{:?}` at debug level. Leaking the
/// MDBList key into a shared log file would expose the user's account.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key
    let key = RedactedApiKey::new("abc123secret");

    // WHEN: Formatting both ways
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("abc123secret"));
    assert!(!display.contains("abc123secret"));
    assert_eq!(key.as_str(), "abc123secret");
    assert_eq!(key.len(), 12);
}

/// **VALUE**: Verifies serialization is refused.
///
/// **WHY THIS MATTERS**: Responses are rendered with serde; a key accidentally placed in a
/// rendered struct must fail loudly instead of printing.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize`.
#[test]
fn given_api_key_when_serialized_then_fails() {
    let key = RedactedApiKey::new("abc123");

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "Serializing a key must fail");
}

#[test]
fn given_whitespace_key_when_checked_then_is_blank_but_not_empty() {
    let key = RedactedApiKey::new("   ");

    assert!(key.is_blank());
    assert!(!key.is_empty());
    assert!(RedactedApiKey::new("").is_blank());
    assert!(!RedactedApiKey::new("k").is_blank());
}

/// **VALUE**: Verifies the loggable hint reveals at most the last four characters.
///
/// **WHY THIS MATTERS**: Debug logs show which key was used so users can tell two
/// configured keys apart without exposing either.
///
/// **BUG THIS CATCHES**: Would catch the hint leaking a short key or the key's prefix.
#[test]
fn given_keys_of_different_lengths_when_hinted_then_only_tail_of_long_key_shown() {
    let long = RedactedApiKey::new("0123456789abcdef");
    let short = RedactedApiKey::new("abc123");

    assert_eq!(long.hint(), "****cdef");
    assert_eq!(short.hint(), "****");
    assert_eq!(format!("{long}"), "****cdef");
    assert!(!format!("{long:?}").contains("cdef"));
}
