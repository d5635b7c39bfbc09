//! List, list item and watchlist records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user list as returned by the list, top-list and search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdbList {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub description: String,
    #[serde(rename = "mediatype", deserialize_with = "crate::nullable::or_default")]
    pub media_type: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub items: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub dynamic: bool,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub private: bool,
}

/// Result of renaming a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUpdateResponse {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "crate::nullable::or_default")]
    pub updated_ids: Vec<u64>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub name: String,
}

/// Items of a list, split by media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItems {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub movies: Vec<ListItem>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub shows: Vec<ListItem>,
}

impl ListItems {
    pub fn len(&self) -> usize {
        self.movies.len() + self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub rank: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub adult: u8,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub imdb_id: String,
    pub tvdb_id: Option<u64>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub language: String,
    #[serde(rename = "mediatype", deserialize_with = "crate::nullable::or_default")]
    pub media_type: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub release_year: u32,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub spoken_language: String,
}

/// Trakt ids added to or removed from a list since its last update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListChanges {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub movie: MovieChanges,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieChanges {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub trakt_ids: TraktIdChanges,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraktIdChanges {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub added: Vec<u64>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub removed: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistItems {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub movies: Vec<WatchlistItem>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub shows: Vec<WatchlistItem>,
}

/// A list item plus the time it was put on the watchlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    #[serde(flatten)]
    pub item: ListItem,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub watchlist_at: String,
}

/// Body of the list rename endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNameUpdate {
    pub name: String,
}
