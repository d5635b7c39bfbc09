use crate::mdblist_client::{ListRef, UserRef};

/// **VALUE**: Verifies that a numeric ID wins over a username/list name pair.
///
/// **WHY THIS MATTERS**: Users sometimes pass both. The ID is unambiguous; the name pair
/// can point at a renamed list.
///
/// **BUG THIS CATCHES**: Would catch the precedence being reversed.
#[test]
fn given_id_and_names_when_resolved_then_id_is_used() {
    // GIVEN: Both addressing modes
    // WHEN: Resolving
    let list = ListRef::resolve(Some(42), Some("someone"), Some("favorites"))
        .expect("list should resolve");

    // THEN: The ID mode is chosen
    assert_eq!(list, ListRef::Id(42));
}

/// **VALUE**: Verifies that ID 0 counts as absent.
///
/// **WHY THIS MATTERS**: The command line defaults numeric flags to 0 in some shells and
/// scripts. List 0 does not exist, so treating it as a real ID would always 404.
///
/// **BUG THIS CATCHES**: Would catch `Some(0)` being sent as `/lists/0`.
#[test]
fn given_zero_id_and_names_when_resolved_then_names_are_used() {
    let list = ListRef::resolve(Some(0), Some("someone"), Some("favorites"))
        .expect("list should resolve");

    assert_eq!(
        list,
        ListRef::Name {
            username: "someone".to_string(),
            listname: "favorites".to_string(),
        }
    );
}

#[test]
fn given_incomplete_name_pair_when_resolved_then_validation_error() {
    let missing_listname = ListRef::resolve(None, Some("someone"), None);
    let blank_username = ListRef::resolve(Some(0), Some(" "), Some("favorites"));

    for result in [missing_listname, blank_username] {
        let err = result.expect_err("incomplete pair must be rejected");
        assert!(err.is_validation());
        assert!(
            err.to_string()
                .contains("either --id or both --username and --listname are required")
        );
    }
}

#[test]
fn given_user_selectors_when_resolved_then_id_then_name_then_error() {
    assert_eq!(
        UserRef::resolve(Some(7), Some("someone")).expect("id"),
        UserRef::Id(7)
    );
    assert_eq!(
        UserRef::resolve(Some(0), Some("someone")).expect("name"),
        UserRef::Name("someone".to_string())
    );

    let err = UserRef::resolve(None, None).expect_err("nothing given");
    assert!(err.is_validation());
    assert!(err.to_string().contains("--username"));
}
