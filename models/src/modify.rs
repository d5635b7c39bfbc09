//! Static list and watchlist modification payloads.

use crate::ModelError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a modification adds or removes items. Rendered into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyAction {
    Add,
    Remove,
}

impl ModifyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifyAction::Add => "add",
            ModifyAction::Remove => "remove",
        }
    }
}

impl fmt::Display for ModifyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifyAction {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "add" => Ok(ModifyAction::Add),
            "remove" => Ok(ModifyAction::Remove),
            other => Err(ModelError::UnknownValue {
                message: format!("action must be either 'add' or 'remove', got '{other}'"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// A movie or show addressed by one external id.
///
/// Serializes as `{"tmdb": 603}` or `{"imdb": "tt0133093"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaIdentifier {
    Tmdb(u64),
    Imdb(String),
}

/// Body of the list and watchlist `items/{action}` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyListRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<MediaIdentifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<MediaIdentifier>,
}

impl ModifyListRequest {
    pub fn builder() -> ModifyListRequestBuilder {
        ModifyListRequestBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len() + self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty()
    }
}

/// Collects ids from the four item categories and refuses to build an empty request.
#[derive(Debug, Default)]
pub struct ModifyListRequestBuilder {
    movie_tmdb: Vec<u64>,
    movie_imdb: Vec<String>,
    show_tmdb: Vec<u64>,
    show_imdb: Vec<String>,
}

impl ModifyListRequestBuilder {
    pub fn with_movie_tmdb_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.movie_tmdb.extend(ids);
        self
    }

    pub fn with_movie_imdb_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.movie_imdb.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_show_tmdb_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.show_tmdb.extend(ids);
        self
    }

    pub fn with_show_imdb_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.show_imdb.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Build the request. Movies keep TMDb ids before IMDb ids; same for shows.
    #[track_caller]
    pub fn build(self) -> Result<ModifyListRequest, ModelError> {
        if self.movie_tmdb.is_empty()
            && self.movie_imdb.is_empty()
            && self.show_tmdb.is_empty()
            && self.show_imdb.is_empty()
        {
            return Err(ModelError::Validation {
                message: String::from("at least one movie or show ID must be provided"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(blank) = self
            .movie_imdb
            .iter()
            .chain(self.show_imdb.iter())
            .find(|id| id.trim().is_empty())
        {
            return Err(ModelError::Validation {
                message: format!("IMDb ID cannot be blank: '{blank}'"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let movies = self
            .movie_tmdb
            .into_iter()
            .map(MediaIdentifier::Tmdb)
            .chain(self.movie_imdb.into_iter().map(MediaIdentifier::Imdb))
            .collect();

        let shows = self
            .show_tmdb
            .into_iter()
            .map(MediaIdentifier::Tmdb)
            .chain(self.show_imdb.into_iter().map(MediaIdentifier::Imdb))
            .collect();

        Ok(ModifyListRequest { movies, shows })
    }
}

/// Per-category counts reported after a modification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyCounts {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub movies: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub shows: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyListResponse {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub added: ModifyCounts,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub existing: ModifyCounts,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub not_found: ModifyCounts,
}

/// The watchlist endpoints answer with the same shape as static lists.
pub type ModifyWatchlistResponse = ModifyListResponse;
