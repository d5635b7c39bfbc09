use crate::cli::{
    ActionArg, Cli, Commands, GetCommands, ItemArgs, OutputArg, SearchCommands, UpdateCommands,
    require_text,
};

use client_core::ListRef;

use clap::{CommandFactory, Parser};

/// **VALUE**: Verifies the clap definition is internally consistent.
///
/// **WHY THIS MATTERS**: Conflicting short flags or duplicate names only fail when the
/// affected subcommand is parsed, which may be long after release.
///
/// **BUG THIS CATCHES**: Would catch two arguments sharing `-i` or `-a` in one command.
#[test]
fn given_cli_definition_when_asserted_then_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    // GIVEN: Global flags placed after the subcommand
    let args = ["mdblist", "get", "my-limits", "-o", "yaml", "-vv", "--timeout", "5"];

    // WHEN: Parsing
    let cli = Cli::try_parse_from(args).expect("arguments should parse");

    // THEN: Globals are picked up
    assert_eq!(cli.output, Some(OutputArg::Yaml));
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.timeout, Some(5));
    assert!(matches!(cli.command, Commands::Get(GetCommands::MyLimits)));
}

/// **VALUE**: Verifies that list selectors accept both addressing modes and prefer the ID.
///
/// **WHY THIS MATTERS**: `get list` is documented to take either `--id` or
/// `--username` with `--listname`.
///
/// **BUG THIS CATCHES**: Would catch the flags being declared as mutually exclusive or
/// the ID losing precedence.
#[test]
fn given_list_flags_when_parsed_then_selector_prefers_id() {
    let cli = Cli::try_parse_from([
        "mdblist", "get", "list", "--id", "42", "--username", "someone", "--listname", "top",
    ])
    .expect("arguments should parse");

    let Commands::Get(GetCommands::List(selector)) = cli.command else {
        panic!("expected get list");
    };
    assert_eq!(selector.resolve().expect("selector"), ListRef::Id(42));
}

#[test]
fn given_list_items_with_paging_when_parsed_then_page_args_set() {
    let cli = Cli::try_parse_from([
        "mdblist", "get", "list-items", "--username", "someone", "--listname", "top",
        "--limit", "10", "--offset", "20", "--sort", "title",
    ])
    .expect("arguments should parse");

    let Commands::Get(GetCommands::ListItems { page, sort, .. }) = cli.command else {
        panic!("expected get list-items");
    };
    assert_eq!(page.limit, Some(10));
    assert_eq!(page.offset, Some(20));
    assert_eq!(sort.as_deref(), Some("title"));
}

/// **VALUE**: Verifies that repeated and comma-separated item flags are both accepted.
///
/// **WHY THIS MATTERS**: Users pass IDs either way; dropping one form silently sends fewer
/// items than intended.
///
/// **BUG THIS CATCHES**: Would catch `value_delimiter` being removed from an item flag.
#[test]
fn given_item_flags_when_parsed_then_ids_collected_in_order() {
    let cli = Cli::try_parse_from([
        "mdblist", "update", "list-items", "-i", "42", "-a", "add",
        "--movie-tmdb", "603,604", "--movie-tmdb", "605", "--show-imdb", "tt0944947",
    ])
    .expect("arguments should parse");

    let Commands::Update(UpdateCommands::ListItems { id, action, items }) = cli.command else {
        panic!("expected update list-items");
    };
    assert_eq!(id, 42);
    assert_eq!(action, ActionArg::Add);
    assert_eq!(items.movie_tmdb, vec![603, 604, 605]);

    let request = items.build().expect("request should build");
    assert_eq!(request.movies.len(), 3);
    assert_eq!(request.shows.len(), 1);
}

#[test]
fn given_no_item_flags_when_built_then_validation_error() {
    let err = ItemArgs::default().build().expect_err("empty items must fail");

    assert!(err.is_validation());
}

#[test]
fn given_unknown_action_when_parsed_then_rejected_by_clap() {
    let result = Cli::try_parse_from([
        "mdblist", "update", "watchlist", "-a", "toggle", "--movie-tmdb", "603",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_search_without_query_when_parsed_then_rejected_by_clap() {
    assert!(Cli::try_parse_from(["mdblist", "search", "lists"]).is_err());

    let cli = Cli::try_parse_from(["mdblist", "search", "media", "movie", "-q", "matrix"])
        .expect("arguments should parse");
    assert!(matches!(
        cli.command,
        Commands::Search(SearchCommands::Media { ref query, .. }) if query == "matrix"
    ));
}

#[test]
fn given_blank_text_when_required_then_cli_error_names_flag() {
    let err = require_text("query", "  ").expect_err("blank query must fail");

    assert!(err.is_validation());
    assert!(err.to_string().contains("--query flag is required"));
    assert_eq!(require_text("query", "matrix").expect("present"), "matrix");
}
