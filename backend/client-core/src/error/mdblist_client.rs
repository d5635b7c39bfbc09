//! Errors produced by the MDBList request core.
//!
//! - Every variant carries an [`ErrorLocation`] captured with `#[track_caller]`
//! - `Api` keeps the status code and the response body exactly as received
//! - `Decode` keeps the body that failed to parse

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MdblistClientError {
    /// Client could not be constructed (missing API key, bad base URL).
    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    /// Caller-supplied arguments are insufficient. Raised before any request is sent.
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The service answered with status >= 400.
    ///
    /// `body` holds the response bytes decoded as UTF-8. Invalid sequences are
    /// replaced with U+FFFD rather than failing the error path.
    #[error("API Error: HTTP {status_code} - {body} {location}")]
    Api {
        status_code: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    /// A success body that is not the expected JSON. `body` is read the same way as for `Api`.
    #[error("Decode Error: {message} (body: {body}) {location}")]
    Decode {
        message: String,
        body: String,
        location: ErrorLocation,
    },

    #[error("Encode Error: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl MdblistClientError {
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Remote status for `Api` errors.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Raw response body for `Api` and `Decode` errors.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<url::ParseError> for MdblistClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        MdblistClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for MdblistClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();
        // The request URL carries the API key.
        MdblistClientError::Transport {
            message: error.without_url().to_string(),
            is_timeout,
            is_connection,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for MdblistClientError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let message = match error {
            ModelError::Validation { message, .. } | ModelError::UnknownValue { message, .. } => {
                message
            }
        };
        MdblistClientError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
