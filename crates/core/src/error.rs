//! Error types for deck and document generation.
//!
//! The text pipeline itself is total and never fails. Errors only come from
//! loading configuration and from encoding a finished model into bytes.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or encoding output.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write data.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The requested output format is not supported.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// ZIP container error while packaging output.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization error while writing a part.
    #[error("XML writing error: {0}")]
    XmlError(String),

    /// The encoder could not represent the model.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Invalid layout configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
