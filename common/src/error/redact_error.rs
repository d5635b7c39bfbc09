use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-holding type is asked to leave the process in plain text.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Refused Error: {type_name} holds a secret; read it with as_str() {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
