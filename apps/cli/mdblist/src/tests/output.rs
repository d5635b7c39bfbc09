use crate::output::render;

use client_core::config::OutputFormat;
use models::MdbList;

fn favorites() -> MdbList {
    MdbList {
        id: 1,
        name: "Favorites".to_string(),
        media_type: "movie".to_string(),
        ..MdbList::default()
    }
}

/// **VALUE**: Verifies that JSON output keeps the wire field names.
///
/// **WHY THIS MATTERS**: Scripts pipe this output into `jq` using the names the API
/// documents (`mediatype`), not the Rust field names.
///
/// **BUG THIS CATCHES**: Would catch a rename being applied only when deserializing.
#[test]
fn given_list_when_rendered_as_json_then_wire_names_and_pretty() {
    let rendered = render(&vec![favorites()], OutputFormat::Json).expect("render");

    assert!(rendered.contains("\"mediatype\": \"movie\""));
    assert!(rendered.contains("\"name\": \"Favorites\""));
    assert!(rendered.contains('\n'));
    assert!(!rendered.contains("user_id"));
}

#[test]
fn given_list_when_rendered_as_yaml_then_yaml_mapping() {
    let rendered = render(&favorites(), OutputFormat::Yaml).expect("render");

    assert!(rendered.contains("id: 1"));
    assert!(rendered.contains("name: Favorites"));
    assert!(!rendered.trim_start().starts_with('{'));
}
