use thiserror::Error;

/// Result type alias using MementoError
pub type Result<T> = std::result::Result<T, MementoError>;

/// Error taxonomy for memento operations
///
/// The surface is deliberately small: the only fatal condition the core can
/// detect on its own is a callable value reaching the diff engine. Empty
/// history is a defined no-op outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MementoError {
    /// The diff engine was asked to compare a callable value
    #[error("Invalid argument: callable given, data value expected")]
    InvalidArgument,

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from serde_json::Error to MementoError
impl From<serde_json::Error> for MementoError {
    fn from(err: serde_json::Error) -> Self {
        MementoError::Serialization {
            message: err.to_string(),
        }
    }
}
