//! Error type for tinyimg-io
//!
//! The PNG, JPEG and PNM codecs report failures from the `png`,
//! `jpeg-decoder` and `jpeg-encoder` crates as `DecodeError` or
//! `EncodeError` strings. Header and raster problems found by tinyimg
//! itself (short PNM rasters, oversized dimensions, empty images) are
//! `InvalidData`.

use thiserror::Error;

/// Failure while reading or writing an image file
#[derive(Error, Debug)]
pub enum IoError {
    /// Reading or writing the underlying file or buffer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown magic number, unsupported variant (PNM `P3`, 5-channel PNG),
    /// or a codec whose cargo feature is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File contents or image geometry that tinyimg cannot map onto an
    /// [`Image`](tinyimg_core::Image)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG or JPEG decoder rejected the file
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG or JPEG encoder rejected the image
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Building the decoded `Image` failed
    #[error("core error: {0}")]
    Core(#[from] tinyimg_core::Error),
}

/// Result alias used throughout tinyimg-io
pub type IoResult<T> = Result<T, IoError>;
