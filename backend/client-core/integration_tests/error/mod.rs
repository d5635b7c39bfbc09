mod config;
mod mdblist_client;
