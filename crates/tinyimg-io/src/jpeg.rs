//! JPEG image format support
//!
//! Reads with `jpeg-decoder` (8-bit grayscale and RGB) and writes with
//! `jpeg-encoder` (1 or 3 channels). JPEG is lossy, so a write/read round
//! trip only approximates the original samples.

use crate::{IoError, IoResult, image_from_interleaved, image_to_interleaved};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::{Read, Write};
use tinyimg_core::Image;
use tracing::trace;

/// Encoder quality used by [`write_jpeg`]
pub const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Returns
///
/// A 1-channel image for grayscale files, 3 channels for color files.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG pixel format {:?}",
                other
            )));
        }
    };

    let (width, height) = (u32::from(info.width), u32::from(info.height));
    trace!(width, height, channels, "read_jpeg");
    image_from_interleaved(
        width,
        height,
        channels,
        &pixels,
        (width * channels) as usize,
    )
}

/// Write a 1 or 3 channel image as baseline JPEG.
pub fn write_jpeg<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let color_type = match image.channels() {
        1 => jpeg_encoder::ColorType::Luma,
        3 => jpeg_encoder::ColorType::Rgb,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG cannot store {} channels",
                n
            )));
        }
    };

    let width = u16::try_from(image.width())
        .map_err(|_| IoError::InvalidData(format!("width {} too large", image.width())))?;
    let height = u16::try_from(image.height())
        .map_err(|_| IoError::InvalidData(format!("height {} too large", image.height())))?;

    let encoder = jpeg_encoder::Encoder::new(writer, JPEG_QUALITY);
    encoder
        .encode(&image_to_interleaved(image), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
