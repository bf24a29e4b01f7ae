//! Error types for tinyimg-core
//!
//! Provides a unified error type for the fallible operations of the core
//! crate. Most pixel operations cannot fail by contract (`set_pixel` silently
//! rejects out-of-range writes, `get_pixel` clamps), so the variants here
//! mostly describe malformed construction input.

use thiserror::Error;

/// tinyimg core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A dimension past `i32::MAX`, or a sample count that does not fit
    /// in memory
    #[error("invalid image dimensions: {width}x{height}x{channels}")]
    InvalidDimension {
        width: u32,
        height: u32,
        channels: u32,
    },

    /// Sample buffer length does not match the geometry
    #[error("data length {actual} doesn't match {width}x{height}x{channels} = {expected}")]
    DataLength {
        width: u32,
        height: u32,
        channels: u32,
        expected: usize,
        actual: usize,
    },

    /// Negative coordinate passed to a sampling operation
    #[error("negative coordinate ({x}, {y}, {c})")]
    NegativeCoordinate { x: i32, y: i32, c: i32 },

    /// Sampling requested from an image with no samples
    #[error("empty image: {width}x{height}x{channels} has no samples")]
    EmptyImage {
        width: u32,
        height: u32,
        channels: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for tinyimg core operations
pub type Result<T> = std::result::Result<T, Error>;
