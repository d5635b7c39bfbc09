mod error;
mod helpers;
mod mdblist_client;
