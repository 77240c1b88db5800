//! Error types for blockdown

use thiserror::Error;

/// Main error type for blockdown operations.
///
/// Rendering itself never fails: the renderer always returns a string and
/// reports defects through the diagnostic sink. These variants cover the
/// shell around it (file handling, configuration, input decoding).
#[derive(Error, Debug)]
pub enum BlockdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input document could not be decoded as JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for blockdown operations
pub type Result<T> = std::result::Result<T, BlockdownError>;
