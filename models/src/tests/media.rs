use crate::{MediaIds, MediaInfo, MediaInfoBatchRequest, MediaRating, SearchResult};

/// **VALUE**: Verifies a realistic media-info payload decodes, including renamed fields.
///
/// **WHY THIS MATTERS**: `type` is a Rust keyword and is renamed; forgetting the rename
/// leaves `media_type` silently empty.
#[test]
fn given_media_info_when_decoded_then_renamed_and_nested_fields_populated() {
    // GIVEN: A media-info response with nulls in optional text fields
    let json = r#"{
        "title": "The Matrix", "year": 1999, "released": "1999-03-31",
        "released_digital": null, "description": "A hacker learns...",
        "runtime": 136, "score": 84, "score_average": 82,
        "ids": {"imdb": "tt0133093", "trakt": 481, "tmdb": 603, "tvdb": null, "mal": null},
        "type": "movie",
        "ratings": [{"source": "imdb", "value": 8.7, "score": 87, "votes": 2000000, "url": null}],
        "streams": [{"id": 8, "name": "Netflix"}],
        "watch_providers": [],
        "certification": "R", "commonsense": null, "age_rating": 17,
        "trailer": null, "poster": "https://img/p.jpg", "backdrop": null,
        "keywords": [{"id": 1, "name": "simulation"}]
    }"#;

    // WHEN: Decoding
    let info: MediaInfo = serde_json::from_str(json).unwrap();

    // THEN: Fields land where expected
    assert_eq!(info.media_type, "movie");
    assert_eq!(info.ids.tmdb, 603);
    assert_eq!(info.ids.tvdb, None);
    assert_eq!(info.released_digital, "");
    assert_eq!(info.streams[0].name, "Netflix");
    assert_eq!(info.age_rating, Some(17));
    assert_eq!(info.keywords.len(), 1);
    assert!(info.reviews.is_empty());
}

#[test]
fn given_search_result_when_decoded_then_short_id_names_mapped() {
    let json = r#"{"search": [{"title": "Alien", "year": 1979, "score": 80, "score_average": 79,
                               "type": "movie",
                               "ids": {"imdbid": "tt0078748", "tmdbid": 348, "traktid": 295,
                                       "malid": null, "tvdbid": null}}],
                   "total": 1}"#;

    let result: SearchResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.search[0].ids.imdb_id, "tt0078748");
    assert_eq!(result.search[0].ids.tmdb_id, 348);
}

#[test]
fn given_batch_request_without_appends_when_serialized_then_field_omitted() {
    let request = MediaInfoBatchRequest {
        ids: vec![String::from("tt0133093")],
        append_to_response: Vec::new(),
    };

    let json = serde_json::to_string(&request).unwrap();

    assert_eq!(json, r#"{"ids":["tt0133093"]}"#);
}

/// **VALUE**: Verifies every field of a media-info record accepts `null`.
///
/// **WHY THIS MATTERS**: Unreleased titles come back with `null` ids, ratings and
/// provider lists. Decoding must still yield a record the CLI can render.
///
/// **BUG THIS CATCHES**: Would catch `ids: null` or `ratings: null` failing with a decode error.
#[test]
fn given_media_info_with_every_field_null_when_decoded_then_all_defaulted() {
    // GIVEN: A media-info payload where every field is null
    let json = r#"{
        "title": null, "year": null, "released": null, "released_digital": null,
        "description": null, "runtime": null, "score": null, "score_average": null,
        "ids": null, "type": null, "ratings": null, "streams": null,
        "watch_providers": null, "language": null, "spoken_language": null,
        "country": null, "certification": null, "commonsense": null, "age_rating": null,
        "status": null, "trailer": null, "poster": null, "backdrop": null,
        "reviews": null, "keywords": null
    }"#;

    // WHEN: Decoding
    let info: MediaInfo = serde_json::from_str(json).unwrap();

    // THEN: Equal to the default record
    assert_eq!(info, MediaInfo::default());
}

/// **VALUE**: Verifies nested rating and id records also default nulls.
#[test]
fn given_nested_null_fields_when_decoded_then_defaulted() {
    // GIVEN: Media info with null members inside ids and one rating
    let json = r#"{
        "ids": {"imdb": null, "trakt": null, "tmdb": null},
        "ratings": [{"source": null, "value": null, "score": null}]
    }"#;

    // WHEN: Decoding
    let info: MediaInfo = serde_json::from_str(json).unwrap();

    // THEN: Nested records are defaults
    assert_eq!(info.ids, MediaIds::default());
    assert_eq!(info.ratings, vec![MediaRating::default()]);
}
