//! MDBList API client.
//!
//! [`MdblistClient`] executes one typed HTTP round trip per call. The
//! per-endpoint methods are generated from a static table in
//! [`mdblist_client::resources`]; [`config`] resolves the base URL, timeout
//! and API key before the client is built.

pub mod config;
pub mod error;
pub mod mdblist_client;

#[cfg(test)]
mod tests;

pub use mdblist_client::{
    ApiPath, HttpMethod, ListRef, MdblistClient, MdblistClientBuilder, PathTemplate, QueryParams,
    RequestPayload, ResourceMethod, UserRef,
};

pub const MDBLIST_API_HOST: &str = "api.mdblist.com";
pub const MDBLIST_API_BASE_URL: &str = const_format::concatcp!("https://", MDBLIST_API_HOST);

/// Query parameter carrying the API key on every request.
pub const API_KEY_QUERY_PARAM: &str = "apikey";
