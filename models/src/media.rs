//! Media info, search and rating records.

use crate::LooseValue;

use serde::{Deserialize, Serialize};

/// Detailed information about one movie or show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaInfo {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub year: u32,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub released: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub released_digital: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub description: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub runtime: u32,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score: i64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score_average: i64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ids: MediaIds,
    #[serde(rename = "type", deserialize_with = "crate::nullable::or_default")]
    pub media_type: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ratings: Vec<MediaRating>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub streams: Vec<NamedRef>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub watch_providers: Vec<NamedRef>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub language: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub spoken_language: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub country: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub certification: String,
    pub commonsense: Option<bool>,
    pub age_rating: Option<u32>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub trailer: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub poster: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub backdrop: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "crate::nullable::or_default")]
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "crate::nullable::or_default")]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaIds {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub imdb: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub trakt: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub tmdb: u64,
    pub tvdb: Option<u64>,
    pub mal: Option<u64>,
}

/// One rating source. `value` and `url` vary in type between sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRating {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub source: String,
    pub value: LooseValue,
    pub score: Option<i64>,
    pub votes: Option<u64>,
    pub url: LooseValue,
}

/// An `{id, name}` pair used for streams and watch providers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub author: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub rating: i64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub provider_id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub name: String,
}

/// Body of `POST /{provider}/{media_type}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfoBatchRequest {
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub append_to_response: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub search: Vec<SearchHit>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub year: u32,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score: i64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score_average: i64,
    #[serde(rename = "type", deserialize_with = "crate::nullable::or_default")]
    pub media_type: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ids: SearchIds,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchIds {
    #[serde(rename = "imdbid", deserialize_with = "crate::nullable::or_default")]
    pub imdb_id: String,
    #[serde(rename = "tmdbid", deserialize_with = "crate::nullable::or_default")]
    pub tmdb_id: u64,
    #[serde(rename = "traktid", deserialize_with = "crate::nullable::or_default")]
    pub trakt_id: u64,
    #[serde(rename = "malid")]
    pub mal_id: Option<u64>,
    #[serde(rename = "tvdbid")]
    pub tvdb_id: Option<u64>,
}

/// Body of `POST /rating/{media_type}/{return_rating}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsRequest {
    pub ids: Vec<u64>,
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingsResponse {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub provider_id: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub provider_rating: String,
    #[serde(rename = "mediatype", deserialize_with = "crate::nullable::or_default")]
    pub media_type: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ratings: Vec<RatingEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingEntry {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub rating: f64,
}
