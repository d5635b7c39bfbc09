//! Render decoded responses as JSON or YAML.

use crate::error::MdblistCliError;

use client_core::config::OutputFormat;

use serde::Serialize;

/// Serialize `value` in the requested format. JSON is pretty-printed.
///
/// # Errors
///
/// Returns [`MdblistCliError::Output`] if the value cannot be serialized.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, MdblistCliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}
