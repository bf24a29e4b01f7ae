//! tinyimg-io - Image file I/O
//!
//! Reads and writes 8-bit image files, mapping them onto the planar
//! floating-point [`Image`] of tinyimg-core:
//!
//! - on read, each byte `b` becomes the sample `b / 255`, and interleaved
//!   pixels are split into one plane per channel;
//! - on write, each sample is clamped to `[0, 1]`, scaled by 255 and
//!   rounded.
//!
//! Supported formats (each behind a cargo feature, all on by default):
//!
//! | format | read | write | channels |
//! |--------|------|-------|----------|
//! | PNG (`png-format`) | yes | yes | 1, 2, 3, 4 |
//! | JPEG (`jpeg`) | yes | yes | 1, 3 |
//! | PNM (`pnm`) | yes | yes | 1, 3 |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::fs;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tinyimg_core::Image;
use tracing::debug;

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    debug!(path = %path.display(), "read_image");
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(data),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?format, "write_image");
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(image, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a byte vector.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(image, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    if image.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode empty image {:?}",
            image.dimensions()
        )));
    }

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )))
        }
    }
}

/// Convert a float sample to a byte: clamp to `[0, 1]`, scale, round.
#[inline]
pub fn sample_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a byte to a float sample in `[0, 1]`.
#[inline]
pub fn u8_to_sample(b: u8) -> f32 {
    b as f32 / 255.0
}

/// Build a planar image from interleaved 8-bit rows.
///
/// `stride` is the number of bytes per row in `data`, at least
/// `width * channels`.
#[cfg(any(feature = "png-format", feature = "jpeg"))]
pub(crate) fn image_from_interleaved(
    width: u32,
    height: u32,
    channels: u32,
    data: &[u8],
    stride: usize,
) -> IoResult<Image> {
    let (w, h, c) = (width as usize, height as usize, channels as usize);
    if stride < w * c || data.len() < stride * h.saturating_sub(1) + w * c {
        return Err(IoError::InvalidData(format!(
            "{} bytes too short for {}x{}x{} with stride {}",
            data.len(),
            width,
            height,
            channels,
            stride
        )));
    }

    let mut image = Image::new(width, height, channels)?;
    let plane_len = w * h;
    let samples = image.data_mut();
    for y in 0..h {
        let row = &data[y * stride..y * stride + w * c];
        for x in 0..w {
            for k in 0..c {
                samples[k * plane_len + y * w + x] = u8_to_sample(row[x * c + k]);
            }
        }
    }
    Ok(image)
}

/// Interleave the planes of an image into tightly packed 8-bit pixels.
#[cfg(any(feature = "png-format", feature = "jpeg", feature = "pnm"))]
pub(crate) fn image_to_interleaved(image: &Image) -> Vec<u8> {
    let (w, h, c) = (
        image.width() as usize,
        image.height() as usize,
        image.channels() as usize,
    );
    let plane_len = w * h;
    let samples = image.data();
    let mut out = Vec::with_capacity(plane_len * c);
    for i in 0..plane_len {
        for k in 0..c {
            out.push(sample_to_u8(samples[k * plane_len + i]));
        }
    }
    out
}
