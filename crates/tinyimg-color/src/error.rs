//! Error types for tinyimg-color

use thiserror::Error;

/// Errors that can occur during color conversion
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tinyimg_core::Error),

    /// The image does not have the channel count the conversion requires
    #[error("wrong channel count: expected {expected}, got {actual}")]
    ChannelCount { expected: u32, actual: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
