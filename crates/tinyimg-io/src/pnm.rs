//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PGM (`P5`, 1 channel) and PPM (`P6`, 3
//! channels). On read, any maxval up to 65535 is accepted and samples are
//! normalized by it; writes always use maxval 255. ASCII variants and PBM
//! are not supported.

use crate::{IoError, IoResult, image_to_interleaved};
use std::io::{Read, Write};
use tinyimg_core::Image;
use tracing::trace;

/// Read a binary PNM image from a reader.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut header = HeaderReader { data: &data, pos: 0 };
    let magic = header.token()?;
    let channels: u32 = match magic {
        b"P5" => 1,
        b"P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("PNM maxval {}", maxval)));
    }
    // exactly one whitespace byte separates the header from the raster
    let raster = &data[header.pos + 1..];

    trace!(width, height, channels, maxval, "read_pnm");

    let bytes_per_sample = if maxval < 256 { 1 } else { 2 };
    let (w, h, c) = (width as usize, height as usize, channels as usize);
    let needed = w
        .checked_mul(h)
        .and_then(|n| n.checked_mul(c))
        .and_then(|n| n.checked_mul(bytes_per_sample))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions {}x{} too large", width, height))
        })?;
    // the whole raster must be present before the image is allocated
    if raster.len() < needed {
        return Err(IoError::InvalidData(format!(
            "PNM raster has {} bytes, expected {}",
            raster.len(),
            needed
        )));
    }

    let mut image = Image::new(width, height, channels)?;
    let plane_len = w * h;
    let scale = maxval as f32;
    let samples = image.data_mut();
    for i in 0..plane_len {
        for k in 0..c {
            let s = i * c + k;
            let raw = if bytes_per_sample == 1 {
                u32::from(raster[s])
            } else {
                u32::from(u16::from_be_bytes([raster[2 * s], raster[2 * s + 1]]))
            };
            samples[k * plane_len + i] = raw as f32 / scale;
        }
    }

    Ok(image)
}

/// Write an image as binary PNM.
///
/// 1-channel images become `P5` and 3-channel images `P6`.
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let magic = match image.channels() {
        1 => "P5",
        3 => "P6",
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM cannot store {} channels",
                n
            )));
        }
    };

    write!(writer, "{}\n{} {}\n255\n", magic, image.width(), image.height())?;
    writer.write_all(&image_to_interleaved(image))?;
    Ok(())
}

/// Tokenizer over the ASCII header, skipping whitespace and `#` comments
struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn token(&mut self) -> IoResult<&'a [u8]> {
        loop {
            match self.data.get(self.pos) {
                Some(b'#') => {
                    while let Some(&b) = self.data.get(self.pos) {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                Some(_) => break,
                None => {
                    return Err(IoError::InvalidData("truncated PNM header".to_string()));
                }
            }
        }

        let start = self.pos;
        while let Some(b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        let data = self.data;
        if self.pos >= data.len() {
            return Err(IoError::InvalidData("truncated PNM header".to_string()));
        }
        Ok(&data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "bad PNM header field {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}
