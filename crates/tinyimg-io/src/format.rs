//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File formats understood by tinyimg-io
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG/JFIF
    Jpeg,
    /// Binary portable any-map (PGM `P5`, PPM `P6`)
    Pnm,
}

impl ImageFormat {
    /// Conventional file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Pnm => "pnm",
        }
    }

    /// Guess the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "pnm" | "pgm" | "ppm" => Some(ImageFormat::Pnm),
            _ => None,
        }
    }

    /// Guess the format from the extension of a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// Binary PGM
    pub const PGM_BINARY: &[u8] = b"P5";

    /// Binary PPM
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    if data.starts_with(magic::PGM_BINARY) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(format!(
        "unknown magic number {:02X?}",
        &data[..data.len().min(4)]
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_pnm() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n2 2\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            detect_format_from_bytes(b"P6\n2 2\n255\n").unwrap(),
            ImageFormat::Pnm
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"GIF89a"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("ppm"), Some(ImageFormat::Pnm));
        assert_eq!(ImageFormat::from_extension("tif"), None);
        assert_eq!(ImageFormat::from_path("a/b/dog.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::Png.extension(), "png");
    }
}
