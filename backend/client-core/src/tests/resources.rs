use crate::mdblist_client::resources::{
    LIST_ITEMS_BY_NAME, MODIFY_LIST_ITEMS, MY_LIMITS, RESOURCE_METHODS, UPDATE_LIST_NAME_BY_ID,
};
use crate::mdblist_client::{HttpMethod, RequestPayload};

use models::{ListNameUpdate, MediaInfoBatchRequest, ModifyListRequest, RatingsRequest};

use std::collections::HashSet;

/// **VALUE**: Verifies that every operation appears exactly once in the table.
///
/// **WHY THIS MATTERS**: The CLI and the docs enumerate operations from this table. A
/// duplicated row would generate two methods with one name and fail to compile in a
/// confusing way; a dropped row silently removes an endpoint.
///
/// **BUG THIS CATCHES**: Would catch rows being removed or copy-pasted without renaming.
#[test]
fn given_resource_table_when_listed_then_names_are_unique_and_complete() {
    // GIVEN / WHEN: The full table
    let names: HashSet<&str> = RESOURCE_METHODS.iter().map(|m| m.name).collect();

    // THEN: 21 distinct operations
    assert_eq!(RESOURCE_METHODS.len(), 21);
    assert_eq!(names.len(), RESOURCE_METHODS.len());
    assert!(names.contains("get_my_limits"));
    assert!(names.contains("modify_watchlist"));
}

/// **VALUE**: Verifies that only write operations carry a body.
///
/// **WHY THIS MATTERS**: A GET with a JSON body is dropped by some proxies; a POST without
/// one is rejected by the service.
///
/// **BUG THIS CATCHES**: Would catch a row declared with the wrong verb.
#[test]
fn given_resource_table_when_checking_bodies_then_bodies_match_verbs() {
    for method in RESOURCE_METHODS {
        assert_eq!(
            method.has_body,
            method.method != HttpMethod::Get,
            "{} ({}) body flag does not match verb",
            method.name,
            method.method
        );
    }
}

#[test]
fn given_resource_table_when_checking_paths_then_templates_are_absolute() {
    for method in RESOURCE_METHODS {
        assert!(
            method.path.as_str().starts_with('/'),
            "{} has relative path {}",
            method.name,
            method.path.as_str()
        );
        assert!(
            !method.path.as_str().contains('?'),
            "{} embeds a query string",
            method.name
        );
    }
}

#[test]
fn given_known_rows_when_inspected_then_descriptors_match() {
    assert_eq!(MY_LIMITS.method, HttpMethod::Get);
    assert_eq!(MY_LIMITS.path.as_str(), "/user");
    assert_eq!(MY_LIMITS.response, "MyLimits");

    assert!(LIST_ITEMS_BY_NAME.has_query);
    assert_eq!(
        LIST_ITEMS_BY_NAME.path.placeholders().collect::<Vec<_>>(),
        vec!["username", "listname"]
    );

    assert_eq!(UPDATE_LIST_NAME_BY_ID.method, HttpMethod::Put);
    assert_eq!(MODIFY_LIST_ITEMS.path.as_str(), "/lists/{list_id}/items/{action}");
}

/// **VALUE**: Verifies that empty request bodies fail their pre-flight check.
///
/// **WHY THIS MATTERS**: The check runs before the URL is built, so an empty modify
/// request never reaches the service and never spends API quota.
///
/// **BUG THIS CATCHES**: Would catch a payload type losing its `check` override.
#[test]
fn given_empty_payloads_when_checked_then_validation_errors() {
    // GIVEN: Payloads with nothing to send
    let rename = ListNameUpdate {
        name: "  ".to_string(),
    };
    let batch = MediaInfoBatchRequest::default();
    let ratings = RatingsRequest {
        ids: vec![603],
        provider: String::new(),
    };
    let modify = ModifyListRequest::default();

    // WHEN / THEN: Every check fails with a validation error
    assert!(rename.check().expect_err("blank name").is_validation());
    assert!(batch.check().expect_err("no ids").is_validation());
    assert!(ratings.check().expect_err("no provider").is_validation());
    let err = modify.check().expect_err("no items");
    assert!(err.is_validation());
    assert!(err.to_string().contains("at least one movie or show ID"));
}

#[test]
fn given_filled_payloads_when_checked_then_ok() {
    let rename = ListNameUpdate {
        name: "Favorites".to_string(),
    };
    let modify = ModifyListRequest::builder()
        .with_movie_tmdb_ids([603])
        .build()
        .expect("request should build");

    assert!(rename.check().is_ok());
    assert!(modify.check().is_ok());
}
