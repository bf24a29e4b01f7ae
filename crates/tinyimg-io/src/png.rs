//! PNG image format support
//!
//! Palette images are expanded to RGB(A) and 16-bit images are stripped to
//! 8 bits on read, so every decoded image has 1 (gray), 2 (gray + alpha),
//! 3 (RGB) or 4 (RGBA) channels of `b / 255` samples.

use crate::{IoError, IoResult, image_from_interleaved, image_to_interleaved};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tinyimg_core::Image;
use tracing::{trace, warn};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    if reader.info().bit_depth == BitDepth::Sixteen {
        warn!("16-bit PNG samples truncated to 8 bits");
    }

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth {:?}",
            bit_depth
        )));
    }
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    trace!(
        width = output_info.width,
        height = output_info.height,
        channels,
        "read_png"
    );

    image_from_interleaved(
        output_info.width,
        output_info.height,
        channels,
        &buf[..output_info.buffer_size()],
        output_info.line_size,
    )
}

/// Write a PNG image
///
/// 1, 2, 3 and 4 channel images are written as gray, gray + alpha, RGB and
/// RGBA respectively, 8 bits per sample.
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let color_type = match image.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG cannot store {} channels",
                n
            )));
        }
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&image_to_interleaved(image))
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::u8_to_sample;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let mut image = Image::new(10, 10, 1).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                image.set_pixel(x, y, 0, u8_to_sample(((x + y) * 10) as u8));
            }
        }

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.dimensions(), (10, 10, 1));
        assert_eq!(image2, image);
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut image = Image::new(3, 3, 3).unwrap();
        image.set_pixel(0, 0, 0, 1.0);
        image.set_pixel(1, 1, 1, 1.0);
        image.set_pixel(2, 2, 2, 1.0);

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.channels(), 3);
        assert_eq!(image2.get_pixel(0, 0, 0), 1.0);
        assert_eq!(image2.get_pixel(1, 1, 1), 1.0);
        assert_eq!(image2.get_pixel(2, 2, 2), 1.0);
        assert_eq!(image2.get_pixel(2, 2, 0), 0.0);
    }

    #[test]
    fn test_png_rejects_five_channels() {
        let image = Image::new(2, 2, 5).unwrap();
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&image, &mut buffer),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
