//! Typed request execution against the MDBList API.
//!
//! Every endpoint goes through [`MdblistClient::execute`]: build the URL from
//! the base origin and a resolved [`ApiPath`], append the API key as the last
//! query parameter, send an optional JSON body, read the full response, then
//! either decode it or report the status with the raw body.
//!
//! The client is read-only after construction and cheap to clone. Sharing it
//! across threads relies on `reqwest::Client` being `Send + Sync`.

mod query;
pub mod resources;
mod route;
mod selectors;

pub use query::QueryParams;
pub use resources::{RESOURCE_METHODS, RequestPayload};
pub use route::{ApiPath, HttpMethod, PathTemplate, ResourceMethod};
pub use selectors::{ListRef, UserRef};

use crate::config::ClientConfig;
use crate::error::MdblistClientError;
use crate::{API_KEY_QUERY_PARAM, MDBLIST_API_BASE_URL};

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json";
const REDACTED_VALUE: &str = "[REDACTED]";

#[derive(Debug, Clone)]
pub struct MdblistClient {
    base_url: Url,
    api_key: RedactedApiKey,
    client: Client,
}

impl MdblistClient {
    /// Client for the public API origin with the default timeout.
    ///
    /// # Errors
    /// Returns [`MdblistClientError::Configuration`] if `api_key` is blank.
    #[track_caller]
    pub fn new(api_key: RedactedApiKey) -> Result<Self, MdblistClientError> {
        Self::builder().with_api_key(api_key).build()
    }

    /// Client using the base URL and timeout from a loaded [`ClientConfig`].
    ///
    /// # Errors
    /// Returns [`MdblistClientError::Configuration`] if `api_key` is blank or the
    /// configured base URL is unusable.
    #[track_caller]
    pub fn from_config(
        config: &ClientConfig,
        api_key: RedactedApiKey,
    ) -> Result<Self, MdblistClientError> {
        Self::builder()
            .with_base_url(config.base_url.as_str())
            .with_timeout(config.timeout())
            .with_api_key(api_key)
            .build()
    }

    pub fn builder() -> MdblistClientBuilder {
        MdblistClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one request and decode the JSON response into `T`.
    ///
    /// # Errors
    /// - [`MdblistClientError::Encode`] if `body` cannot be serialized
    /// - [`MdblistClientError::Transport`] on connection, timeout or body-read failure
    /// - [`MdblistClientError::Api`] if the status is >= 400 (raw body attached)
    /// - [`MdblistClientError::Decode`] if the body is not valid JSON for `T` (raw body attached)
    pub async fn execute<T, B>(
        &self,
        method: HttpMethod,
        path: &ApiPath,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<T, MdblistClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, path, query, body).await?;
        decode_body(text)
    }

    /// Execute one request and discard the response body on success.
    ///
    /// # Errors
    /// Same as [`MdblistClient::execute`], minus decoding.
    pub async fn execute_unit<B>(
        &self,
        method: HttpMethod,
        path: &ApiPath,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<(), MdblistClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, query, body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        method: HttpMethod,
        path: &ApiPath,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<String, MdblistClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, query)?;
        let log_url = redact_url(&url);

        let mut request = self
            .client
            .request(method.into(), url)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| MdblistClientError::Encode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(payload);
        }

        debug!("{method} {log_url}");

        let response = request.send().await?;
        let status_code = HttpStatusCode::from(response.status().as_u16());
        // Bytes as sent. Invalid UTF-8 becomes U+FFFD; the charset header is ignored.
        let bytes = response.bytes().await?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        debug!("{method} {log_url} -> HTTP {status_code} ({} bytes)", bytes.len());

        if status_code.is_error() {
            return Err(MdblistClientError::Api {
                status_code,
                body: text,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(text)
    }

    /// Absolute URL for `path` with caller parameters first and the API key last.
    ///
    /// Caller-supplied `apikey` pairs are dropped so the credential cannot be shadowed.
    pub(crate) fn build_url(
        &self,
        path: &ApiPath,
        query: &QueryParams,
    ) -> Result<Url, MdblistClientError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| MdblistClientError::UrlParse {
                message: format!("{} cannot be used as a base URL", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(path.segments());

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                if key == API_KEY_QUERY_PARAM {
                    warn!("Ignoring caller-supplied '{API_KEY_QUERY_PARAM}' query parameter");
                    continue;
                }
                pairs.append_pair(key, value);
            }
            pairs.append_pair(API_KEY_QUERY_PARAM, self.api_key.as_str());
        }

        Ok(url)
    }
}

fn decode_body<T: DeserializeOwned>(text: String) -> Result<T, MdblistClientError> {
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => Err(MdblistClientError::Decode {
            message: e.to_string(),
            body: text,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// URL as a string with the API key value masked, for logging.
pub(crate) fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == API_KEY_QUERY_PARAM {
                REDACTED_VALUE.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Builder for [`MdblistClient`]; the API key is the only required input.
#[derive(Debug, Default)]
pub struct MdblistClientBuilder {
    base_url: Option<String>,
    api_key: Option<RedactedApiKey>,
    timeout: Option<Duration>,
}

impl MdblistClientBuilder {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: RedactedApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`MdblistClientError::Configuration`] if the API key is missing or blank,
    /// the base URL is not an absolute http(s) URL, or the HTTP client cannot be created.
    #[track_caller]
    pub fn build(self) -> Result<MdblistClient, MdblistClientError> {
        let api_key = match self.api_key {
            Some(key) if !key.is_blank() => key,
            _ => {
                return Err(MdblistClientError::configuration(
                    "MDBList API key is required (set MDBLIST_API_KEY or pass --api-key)",
                ));
            }
        };

        let raw_base_url = self
            .base_url
            .unwrap_or_else(|| MDBLIST_API_BASE_URL.to_string());

        let base_url = Url::parse(&raw_base_url).map_err(|e| {
            MdblistClientError::configuration(format!("Invalid base URL '{raw_base_url}': {e}"))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(MdblistClientError::configuration(format!(
                "Base URL must be an absolute http(s) URL: {raw_base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT_DURATION))
            .build()
            .map_err(|e| {
                MdblistClientError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        debug!("MDBList client ready for {base_url} (key {})", api_key.hint());

        Ok(MdblistClient {
            base_url,
            api_key,
            client,
        })
    }
}
