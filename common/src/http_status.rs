//! HTTP status code classification for API error reporting.

/// Numeric HTTP status returned by the remote service.
///
/// Kept as the raw code so errors round-trip the exact value the server sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

/// First status code treated as a failed request.
const FIRST_ERROR_STATUS: u16 = 400;

impl HttpStatusCode {
    #[inline]
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Any status the client reports as an API error (>= 400).
    pub fn is_error(&self) -> bool {
        self.0 >= FIRST_ERROR_STATUS
    }

    /// 4xx client errors (bad key, unknown list, malformed request).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
