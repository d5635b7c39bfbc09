//! Endpoint descriptors: HTTP verb, path template and resolved path.

use crate::error::MdblistClientError;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// A path such as `/lists/{list_id}/items` with named placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.0.split('/').filter_map(placeholder_name)
    }

    /// Substitute every placeholder with its value.
    ///
    /// Values are kept as whole segments, so a `/` inside a username stays
    /// part of that segment once percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`MdblistClientError::Validation`] if a placeholder has no value
    /// or its value is blank.
    #[track_caller]
    pub fn resolve(&self, values: &[(&str, String)]) -> Result<ApiPath, MdblistClientError> {
        let mut segments = Vec::new();

        for segment in self.0.split('/').filter(|s| !s.is_empty()) {
            let Some(name) = placeholder_name(segment) else {
                segments.push(segment.to_string());
                continue;
            };

            let Some((_, value)) = values.iter().find(|(key, _)| *key == name) else {
                return Err(MdblistClientError::validation(format!(
                    "no value supplied for '{name}' in {}",
                    self.0
                )));
            };

            if value.trim().is_empty() {
                return Err(MdblistClientError::validation(format!(
                    "'{name}' cannot be empty"
                )));
            }

            // URL parsing normalizes dot segments, which would climb out of the template.
            if matches!(value.trim(), "." | "..") {
                return Err(MdblistClientError::validation(format!(
                    "'{name}' cannot be '.' or '..'"
                )));
            }

            segments.push(value.clone());
        }

        Ok(ApiPath { segments })
    }
}

fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// A resolved request path, held as unencoded segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Split an already-resolved path such as `/lists/42` into segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for ApiPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// One row of the resource-method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMethod {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: PathTemplate,
    pub has_query: bool,
    pub has_body: bool,
    pub response: &'static str,
}
