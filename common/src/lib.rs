//! Shared primitives for the MDBList client workspace.
//!
//! Everything here is independent of the remote API: source-location
//! tracking for errors, HTTP status classification and the credential
//! wrapper that keeps the API key out of logs.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Wire-format records exchanged with the API
//! - **client-core**: Request execution and the resource-method table
//! - **mdblist**: Command-line front end

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
