use crate::{LooseValue, MediaRating};

/// **VALUE**: Verifies that rating values decode whether the source sends a number,
/// a string, or null.
///
/// **WHY THIS MATTERS**: Rating sources disagree on the type of `value` and `url`. A strict
/// type would make the whole media-info response fail to decode.
///
/// **BUG THIS CATCHES**: Would catch reordering the untagged variants so that `null`
/// or numbers are swallowed by the wrong arm.
#[test]
fn given_mixed_rating_values_when_decoded_then_each_variant_is_chosen() {
    // GIVEN: Three ratings with differently typed values
    let json = r#"[
        {"source": "imdb", "value": 7.4, "score": 74, "votes": 1200, "url": "tt0133093"},
        {"source": "tomatoes", "value": "87%", "score": null, "votes": null, "url": 771},
        {"source": "letterboxd", "value": null, "url": null}
    ]"#;

    // WHEN: Decoding
    let ratings: Vec<MediaRating> = serde_json::from_str(json).unwrap();

    // THEN: Variants follow the JSON type
    assert_eq!(ratings[0].value.as_f64(), Some(7.4));
    assert_eq!(ratings[0].url, LooseValue::from("tt0133093"));
    assert_eq!(ratings[1].value.as_str(), Some("87%"));
    assert_eq!(ratings[1].url, LooseValue::from(771_i64));
    assert!(ratings[2].value.is_null());
    assert!(ratings[2].url.is_null());
    assert_eq!(ratings[2].score, None);
}

/// **VALUE**: Verifies integers keep their representation when re-rendered.
///
/// **WHY THIS MATTERS**: The CLI re-serializes decoded values; `771` turning into `771.0`
/// would be a visible change to the user.
#[test]
fn given_integer_value_when_reserialized_then_stays_integer() {
    let value: LooseValue = serde_json::from_str("771").unwrap();

    let rendered = serde_json::to_string(&value).unwrap();

    assert_eq!(rendered, "771");
    assert_eq!(value.to_string(), "771");
}

#[test]
fn given_numeric_string_when_read_as_f64_then_parses() {
    assert_eq!(LooseValue::from("6.5").as_f64(), Some(6.5));
    assert_eq!(LooseValue::from("87%").as_f64(), None);
    assert_eq!(LooseValue::Null.as_f64(), None);
}
