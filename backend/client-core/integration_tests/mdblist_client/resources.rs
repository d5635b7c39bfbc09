use crate::helpers::{TEST_API_KEY, client_for};

use client_core::{ListRef, QueryParams, UserRef};

use models::{
    ListNameUpdate, MediaInfoBatchRequest, ModifyAction, ModifyListRequest, RatingsRequest,
};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end check of the caller's own lists.
///
/// **WHY THIS MATTERS**: This is the first command most users run after setting their key.
///
/// **BUG THIS CATCHES**: Would catch the path, the credential, or the list record decoding
/// being wrong.
#[tokio::test]
async fn given_my_lists_response_when_fetched_then_lists_decoded() {
    // GIVEN: The service returns one list for key abc123
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/user"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Favorites",
            "slug": "favorites",
            "items": 3,
            "likes": 0,
            "dynamic": false,
            "private": true,
            "mediatype": "movie",
            "description": ""
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching my lists
    let lists = client.get_my_lists().await.expect("lists should decode");

    // THEN: One list with the expected identity
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, 1);
    assert_eq!(lists[0].name, "Favorites");
    assert_eq!(lists[0].media_type, "movie");
    assert!(lists[0].private);
}

/// **VALUE**: Verifies that an ID selector is used even when names are also supplied.
///
/// **WHY THIS MATTERS**: The name pair is ambiguous after a rename; the ID is not.
///
/// **BUG THIS CATCHES**: Would catch the by-name endpoint being hit when an ID is known.
#[tokio::test]
async fn given_id_and_names_when_list_fetched_then_id_path_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 42, "name": "Top"}])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let list = ListRef::resolve(Some(42), Some("someone"), Some("top")).expect("selector");
    let lists = client.get_list(&list).await.expect("list should decode");

    assert_eq!(lists[0].id, 42);
}

#[tokio::test]
async fn given_name_selector_when_items_fetched_then_query_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/someone/top-movies/items"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "movies": [
                {"id": 603, "rank": 5, "title": "The Matrix", "imdb_id": "tt0133093",
                 "mediatype": "movie", "release_year": 1999, "adult": null},
                {"id": 604, "rank": 6, "title": "The Matrix Reloaded", "imdb_id": "tt0234215",
                 "mediatype": "movie", "release_year": 2003}
            ],
            "shows": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let list = ListRef::resolve(None, Some("someone"), Some("top-movies")).expect("selector");
    let query = QueryParams::new().with_opt("limit", Some(2)).with_opt("offset", Some(4));
    let items = client
        .get_list_items(&list, &query)
        .await
        .expect("items should decode");

    assert_eq!(items.len(), 2);
    assert_eq!(items.movies[0].title, "The Matrix");
    assert_eq!(items.movies[0].adult, 0);
    assert!(items.shows.is_empty());
}

#[tokio::test]
async fn given_user_name_when_user_lists_fetched_then_name_path_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/user/someone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let lists = client
        .get_user_lists(&UserRef::Name("someone".to_string()))
        .await
        .expect("lists should decode");

    assert!(lists.is_empty());
}

/// **VALUE**: Verifies that a rename sends PUT with only the new name.
///
/// **WHY THIS MATTERS**: The rename endpoint replaces list metadata; extra fields would
/// overwrite settings the user did not mean to change.
///
/// **BUG THIS CATCHES**: Would catch the wrong verb or a body with extra fields.
#[tokio::test]
async fn given_new_name_when_list_renamed_then_put_with_name_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/lists/42"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "id": 42,
            "name": "Renamed"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let response = client
        .update_list_name(&ListRef::Id(42), "Renamed")
        .await
        .expect("rename should succeed");

    assert!(response.success);
    assert_eq!(response.name, "Renamed");
}

/// **VALUE**: Verifies that an empty modify request never reaches the network.
///
/// **WHY THIS MATTERS**: Every call spends API quota. An empty add/remove is always a user
/// mistake and should fail locally with a clear message.
///
/// **BUG THIS CATCHES**: Would catch the pre-flight check running after the request.
#[tokio::test]
async fn given_zero_items_when_list_modified_then_validation_error_without_request() {
    // GIVEN: A server that must receive nothing
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Modifying with an empty request
    let err = client
        .modify_list_items(42, ModifyAction::Add, &ModifyListRequest::default())
        .await
        .expect_err("empty request must fail");

    // THEN: Local validation error
    assert!(err.is_validation());
    assert!(err.to_string().contains("at least one movie or show ID"));
}

#[tokio::test]
async fn given_mixed_ids_when_list_items_removed_then_body_and_counts_match() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists/42/items/remove"))
        .and(body_json(json!({
            "movies": [{"tmdb": 603}, {"imdb": "tt0234215"}],
            "shows": [{"tmdb": 1399}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "added": {"movies": 0, "shows": 0},
            "existing": {"movies": 2, "shows": 1},
            "not_found": {"movies": 0, "shows": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let items = ModifyListRequest::builder()
        .with_movie_tmdb_ids([603])
        .with_movie_imdb_ids(["tt0234215"])
        .with_show_tmdb_ids([1399])
        .build()
        .expect("request should build");

    let response = client
        .modify_list_items(42, ModifyAction::Remove, &items)
        .await
        .expect("modify should succeed");

    assert_eq!(response.existing.movies, 2);
    assert_eq!(response.existing.shows, 1);
}

#[tokio::test]
async fn given_watchlist_add_when_executed_then_action_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/watchlist/items/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "added": {"movies": 1, "shows": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let items = ModifyListRequest::builder()
        .with_movie_imdb_ids(["tt0133093"])
        .build()
        .expect("request should build");

    let response = client
        .modify_watchlist(ModifyAction::Add, &items)
        .await
        .expect("watchlist add should succeed");

    assert_eq!(response.added.movies, 1);
}

#[tokio::test]
async fn given_media_lookup_when_fetched_then_loose_rating_values_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tmdb/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "The Matrix",
            "year": 1999,
            "type": "movie",
            "ids": {"imdb": "tt0133093", "tmdb": 603, "trakt": 481},
            "ratings": [
                {"source": "imdb", "value": 8.7, "score": 87, "votes": 2000000, "url": null},
                {"source": "letterboxd", "value": "4.2", "score": 84, "votes": null, "url": "matrix"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let info = client
        .get_media_info("tmdb", "movie", "603", &QueryParams::new())
        .await
        .expect("media should decode");

    assert_eq!(info.title, "The Matrix");
    assert_eq!(info.media_type, "movie");
    assert_eq!(info.ids.tmdb, 603);
    assert_eq!(info.ratings[0].value.as_f64(), Some(8.7));
    assert!(info.ratings[0].url.is_null());
    assert_eq!(info.ratings[1].value.as_str(), Some("4.2"));
}

#[tokio::test]
async fn given_batch_request_when_posted_then_body_sent_and_array_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/imdb/show"))
        .and(body_json(json!({"ids": ["tt0944947"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "Game of Thrones", "type": "show"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let request = MediaInfoBatchRequest {
        ids: vec!["tt0944947".to_string()],
        append_to_response: Vec::new(),
    };

    let infos = client
        .get_media_info_batch("imdb", "show", &request)
        .await
        .expect("batch should decode");

    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].title, "Game of Thrones");
}

#[tokio::test]
async fn given_ratings_request_when_posted_then_ratings_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rating/movie/imdb"))
        .and(body_json(json!({"ids": [603], "provider": "tmdb"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "provider_id": "tmdb",
            "provider_rating": "imdb",
            "mediatype": "movie",
            "ratings": [{"id": 603, "rating": 8.7}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let request = RatingsRequest {
        ids: vec![603],
        provider: "tmdb".to_string(),
    };

    let response = client
        .get_ratings("movie", "imdb", &request)
        .await
        .expect("ratings should decode");

    assert_eq!(response.ratings.len(), 1);
    assert_eq!(response.ratings[0].rating, 8.7);
}

#[tokio::test]
async fn given_list_changes_and_activities_when_fetched_then_timestamps_parse() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/42/changes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "movie": {"trakt_ids": {"added": [1, 2], "removed": [3]}},
            "updated": "2024-05-01T10:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sync/last_activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "watchlisted_at": "2024-05-02T11:30:00Z"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let changes = client.get_list_changes(42).await.expect("changes");
    let activities = client.get_last_activities().await.expect("activities");

    assert_eq!(changes.movie.trakt_ids.added, vec![1, 2]);
    assert!(changes.updated.is_some());
    assert!(activities.watchlisted_at.is_some());
}

#[tokio::test]
async fn given_search_and_watchlist_queries_when_fetched_then_params_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/search"))
        .and(query_param("query", "horror"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9, "name": "Horror"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/watchlist/items"))
        .and(query_param("sort", "title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "movies": [{"id": 603, "title": "The Matrix", "mediatype": "movie",
                        "watchlist_at": "2024-05-02"}],
            "shows": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let lists = client
        .search_lists(&QueryParams::new().with("query", "horror"))
        .await
        .expect("search should decode");
    let watchlist = client
        .get_watchlist_items(&QueryParams::new().with("sort", "title"))
        .await
        .expect("watchlist should decode");

    assert_eq!(lists[0].name, "Horror");
    assert_eq!(watchlist.movies[0].item.title, "The Matrix");
    assert_eq!(watchlist.movies[0].watchlist_at, "2024-05-02");
}

#[tokio::test]
async fn given_blank_rename_when_executed_then_no_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .update_list_name_by_id(42, &ListNameUpdate { name: String::new() })
        .await
        .expect_err("blank name must fail");

    assert!(err.is_validation());
}

/// **VALUE**: Verifies a `..` username cannot redirect a list lookup to another endpoint.
///
/// **WHY THIS MATTERS**: URL normalization turns `/lists/../top` into `/lists/top`, which
/// answers 200 with the top lists and would be rendered as the user's list.
///
/// **BUG THIS CATCHES**: Would catch dot segments reaching the URL builder.
#[tokio::test]
async fn given_dot_segment_username_when_list_fetched_then_no_request_sent() {
    // GIVEN: A server that must receive nothing
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching a list whose username is `..`
    let err = client
        .get_list(&ListRef::Name {
            username: String::from(".."),
            listname: String::from("top"),
        })
        .await
        .expect_err("dot segment must fail");

    // THEN: Validation error, no request
    assert!(err.is_validation());
}
