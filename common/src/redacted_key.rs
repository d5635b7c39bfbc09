//! The MDBList credential.
//!
//! The key travels as a query parameter, so every URL the client builds is a
//! secret. This wrapper keeps the raw value out of `Debug`, `Display` and serde
//! output; the only way to read it is [`RedactedApiKey::as_str`].

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroizing;

const MASK: &str = "****";
const HINT_CHARS: usize = 4;
const MIN_LEN_FOR_HINT: usize = 12;

/// API key whose memory is wiped on drop.
#[derive(Clone, Default)]
pub struct RedactedApiKey {
    inner: Zeroizing<String>,
}

impl RedactedApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(key.into()),
        }
    }

    /// Raw key value. Only for attaching the credential to a request.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when the key is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Loggable hint such as `****f00d`.
    ///
    /// Short keys show the mask only; revealing four characters of a short key
    /// would give away too much of it.
    pub fn hint(&self) -> String {
        let chars: Vec<char> = self.inner.chars().collect();
        if chars.len() < MIN_LEN_FOR_HINT {
            return MASK.to_string();
        }
        let tail: String = chars[chars.len() - HINT_CHARS..].iter().collect();
        format!("{MASK}{tail}")
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RedactedApiKey").field(&MASK).finish()
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint())
    }
}

impl serde::Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::SerializationRefused {
            type_name: "RedactedApiKey",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
