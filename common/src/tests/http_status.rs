use crate::HttpStatusCode;

/// **VALUE**: Verifies the >= 400 boundary used to classify API errors.
///
/// **WHY THIS MATTERS**: The request core turns every status at or above 400 into an API
/// error; 399 must still be treated as success.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the error boundary.
#[test]
fn given_boundary_statuses_when_classified_then_400_is_first_error() {
    assert!(!HttpStatusCode(200).is_error());
    assert!(!HttpStatusCode(399).is_error());
    assert!(HttpStatusCode(400).is_error());
    assert!(HttpStatusCode(503).is_error());
}

#[test]
fn given_client_and_server_statuses_when_classified_then_ranges_are_disjoint() {
    let not_found = HttpStatusCode::from(404);
    let unavailable = HttpStatusCode::from(503);

    assert!(not_found.is_client_error());
    assert!(!not_found.is_server_error());
    assert!(unavailable.is_server_error());
    assert!(!unavailable.is_client_error());
    assert_eq!(unavailable.as_u16(), 503);
    assert_eq!(unavailable.to_string(), "503");
}
