//! Command-line arguments.

use crate::error::MdblistCliError;

use client_core::config::OutputFormat;
use client_core::error::MdblistClientError;
use client_core::{ListRef, QueryParams, UserRef};

use common::ErrorLocation;
use models::{ModifyAction, ModifyListRequest};

use std::panic::Location;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Main CLI application structure
#[derive(Parser, Debug)]
#[command(
    name = "mdblist",
    version,
    about = "Command-line client for the MDBList API",
    long_about = "Query and update MDBList lists, media and watchlist from the terminal.\n\
                  The API key is read from --api-key or the MDBLIST_API_KEY environment variable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// MDBList API key (falls back to MDBLIST_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API origin (falls back to MDBLIST_BASE_URL, then the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum)]
    pub output: Option<OutputArg>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch resources
    #[command(subcommand)]
    Get(GetCommands),

    /// Search media or public lists
    #[command(subcommand)]
    Search(SearchCommands),

    /// Modify lists and the watchlist
    #[command(subcommand)]
    Update(UpdateCommands),
}

#[derive(Subcommand, Debug)]
pub enum GetCommands {
    /// API limits of your account
    MyLimits,

    /// Your own lists
    MyLists,

    /// Lists of another user
    UserLists(UserSelector),

    /// One list by ID or by owner and slug
    List(ListSelector),

    /// Items of a list
    ListItems {
        #[command(flatten)]
        list: ListSelector,

        #[command(flatten)]
        page: PageArgs,

        /// Sort field, e.g. rank or title
        #[arg(long)]
        sort: Option<String>,

        /// Sort order: asc or desc
        #[arg(long)]
        order: Option<String>,
    },

    /// Trakt ids changed since the last list update
    ListChanges { list_id: u64 },

    /// Details of one movie or show
    MediaInfo {
        /// imdb, tmdb, trakt, tvdb or mal
        provider: String,
        /// movie or show
        media_type: String,
        media_id: String,

        /// Extra sections, e.g. keyword,review
        #[arg(long, value_delimiter = ',')]
        append_to_response: Vec<String>,
    },

    /// Details of several movies or shows
    MediaInfoBatch {
        provider: String,
        media_type: String,

        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        append_to_response: Vec<String>,
    },

    /// Most liked public lists
    TopLists,

    /// Sync timestamps of your account
    LastActivities,

    /// Items on your watchlist
    WatchlistItems {
        /// Sort order, e.g. added_at.desc
        #[arg(long)]
        sort: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// One rating source for several items
    Ratings {
        /// movie or show
        media_type: String,
        /// Rating to return, e.g. imdb or letterboxd
        return_rating: String,

        /// Provider of the ids, e.g. tmdb
        #[arg(long)]
        provider: String,

        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Search movie, show or any
    Media {
        media_type: String,

        #[arg(short, long)]
        query: String,

        #[arg(long)]
        year: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Search public lists by title
    Lists {
        #[arg(short, long)]
        query: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateCommands {
    /// Rename a list
    ListName {
        new_name: String,

        #[command(flatten)]
        list: ListSelector,
    },

    /// Add or remove items of a static list
    ListItems {
        /// List ID
        #[arg(short = 'i', long)]
        id: u64,

        #[arg(short = 'a', long, value_enum)]
        action: ActionArg,

        #[command(flatten)]
        items: ItemArgs,
    },

    /// Add or remove watchlist items
    Watchlist {
        #[arg(short = 'a', long, value_enum)]
        action: ActionArg,

        #[command(flatten)]
        items: ItemArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListSelector {
    /// List ID
    #[arg(long)]
    pub id: Option<u64>,

    /// Username of the list owner
    #[arg(long)]
    pub username: Option<String>,

    /// Name/slug of the list
    #[arg(long)]
    pub listname: Option<String>,
}

impl ListSelector {
    #[track_caller]
    pub fn resolve(&self) -> Result<ListRef, MdblistClientError> {
        ListRef::resolve(
            self.id,
            self.username.as_deref(),
            self.listname.as_deref(),
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct UserSelector {
    /// User ID
    #[arg(long)]
    pub id: Option<u64>,

    #[arg(long)]
    pub username: Option<String>,
}

impl UserSelector {
    #[track_caller]
    pub fn resolve(&self) -> Result<UserRef, MdblistClientError> {
        UserRef::resolve(self.id, self.username.as_deref())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

impl PageArgs {
    pub fn apply(&self, query: QueryParams) -> QueryParams {
        query
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ItemArgs {
    /// TMDb IDs of movies
    #[arg(long, value_delimiter = ',')]
    pub movie_tmdb: Vec<u64>,

    /// IMDb IDs of movies
    #[arg(long, value_delimiter = ',')]
    pub movie_imdb: Vec<String>,

    /// TMDb IDs of shows
    #[arg(long, value_delimiter = ',')]
    pub show_tmdb: Vec<u64>,

    /// IMDb IDs of shows
    #[arg(long, value_delimiter = ',')]
    pub show_imdb: Vec<String>,
}

impl ItemArgs {
    /// # Errors
    ///
    /// Returns [`MdblistClientError::Validation`] if no ID was given or an IMDb ID is blank.
    #[track_caller]
    pub fn build(&self) -> Result<ModifyListRequest, MdblistClientError> {
        let request = ModifyListRequest::builder()
            .with_movie_tmdb_ids(self.movie_tmdb.iter().copied())
            .with_movie_imdb_ids(self.movie_imdb.iter().cloned())
            .with_show_tmdb_ids(self.show_tmdb.iter().copied())
            .with_show_imdb_ids(self.show_imdb.iter().cloned())
            .build()?;
        Ok(request)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputArg {
    Json,
    Yaml,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    Add,
    Remove,
}

impl From<ActionArg> for ModifyAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Add => ModifyAction::Add,
            ActionArg::Remove => ModifyAction::Remove,
        }
    }
}

/// Reject a blank required text flag.
///
/// # Errors
///
/// Returns [`MdblistCliError::Cli`] naming the flag.
#[track_caller]
pub fn require_text<'a>(flag: &str, value: &'a str) -> Result<&'a str, MdblistCliError> {
    if value.trim().is_empty() {
        return Err(MdblistCliError::Cli {
            message: format!("--{flag} flag is required"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(value)
}
