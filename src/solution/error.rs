//! Solution codec error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a solution or log
#[derive(Debug, Error)]
pub enum CodecError {
    /// A line of the text format is not an operation mnemonic
    #[error("Line {line}: unknown operation '{token}'")]
    UnknownOperation { line: usize, token: String },

    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Solution version is not supported by this version
    #[error("Unsupported solution version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
