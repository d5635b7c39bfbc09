mod config;
mod request_url;
mod resources;
mod selectors;
