pub mod config;
pub mod mdblist_client;

pub use config::ConfigError;
pub use mdblist_client::MdblistClientError;
