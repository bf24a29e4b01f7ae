//! Image - Planar floating-point image
//!
//! `Image` is a `width x height x channels` array of `f32` samples. It is
//! the single data type every tinyimg operation reads and writes.
//!
//! Pixel access lives in [`access`], the whole-image utilities (copy, shift,
//! scale, clamp) in [`ops`].
//!
//! # Examples
//!
//! ```
//! use tinyimg_core::Image;
//!
//! // A 4x3 RGB image, zero-initialized
//! let mut im = Image::new(4, 3, 3).unwrap();
//!
//! im.set_pixel(1, 2, 0, 0.75);
//! assert_eq!(im.get_pixel(1, 2, 0), 0.75);
//!
//! // Sampling past the right edge reads the last column
//! assert_eq!(im.get_pixel(4, 2, 0), im.get_pixel(3, 2, 0));
//! ```

pub mod access;
pub mod ops;

use crate::error::{Error, Result};

/// Largest width, height or channel count an [`Image`] accepts
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Planar floating-point image
///
/// # Memory Layout
///
/// Samples are stored planar: every sample of channel 0 precedes every
/// sample of channel 1, and so on. Within a channel, samples are row-major
/// with no padding. The sample for channel `c`, row `y`, column `x` is at
/// index `c * height * width + y * width + x`.
///
/// Any dimension may be zero, in which case the image holds no samples.
/// No dimension may exceed [`MAX_DIMENSION`], so every valid coordinate
/// fits the `i32` taken by the pixel accessors. Geometry is fixed for the
/// lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Number of channels (planes)
    channels: u32,
    /// Sample data (planar, row-major within a plane)
    data: Vec<f32>,
}

impl Image {
    /// Create a new image with every sample set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `width * height * channels`
    /// overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyimg_core::Image;
    ///
    /// let im = Image::new(640, 480, 3).unwrap();
    /// assert_eq!(im.dimensions(), (640, 480, 3));
    /// assert!(im.data().iter().all(|&v| v == 0.0));
    /// ```
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        Self::new_with_value(width, height, channels, 0.0)
    }

    /// Create a new image with every sample set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the sample count overflows.
    pub fn new_with_value(width: u32, height: u32, channels: u32, value: f32) -> Result<Self> {
        let size = sample_count(width, height, channels)?;

        Ok(Image {
            width,
            height,
            channels,
            data: vec![value; size],
        })
    }

    /// Create an image from a planar sample buffer
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `channels` - Number of channels
    /// * `data` - Samples in planar order
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLength` if `data.len() != width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        let expected = sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }

        Ok(Image {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create an image by stacking one plane per channel
    ///
    /// Each plane must hold exactly `width * height` samples in row-major
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyimg_core::Image;
    ///
    /// let r = [1.0, 0.0];
    /// let g = [0.0, 1.0];
    /// let im = Image::from_planes(2, 1, &[&r, &g]).unwrap();
    /// assert_eq!(im.channels(), 2);
    /// assert_eq!(im.get_pixel(1, 0, 1), 1.0);
    /// ```
    pub fn from_planes(width: u32, height: u32, planes: &[&[f32]]) -> Result<Self> {
        let channels = u32::try_from(planes.len()).map_err(|_| {
            Error::InvalidParameter(format!("too many planes: {}", planes.len()))
        })?;
        let plane_len = sample_count(width, height, 1)?;

        let mut data = Vec::with_capacity(sample_count(width, height, channels)?);
        for (k, plane) in planes.iter().enumerate() {
            if plane.len() != plane_len {
                return Err(Error::InvalidParameter(format!(
                    "plane {} has {} samples, expected {}x{} = {}",
                    k,
                    plane.len(),
                    width,
                    height,
                    plane_len
                )));
            }
            data.extend_from_slice(plane);
        }

        Ok(Image {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a zeroed image with the same geometry as this one
    pub fn create_template(&self) -> Image {
        Image {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: vec![0.0; self.data.len()],
        }
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the geometry as (width, height, channels)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the image holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of the sample at `(x, y, c)`
    ///
    /// No bounds checking is performed; the result is only meaningful for
    /// in-range coordinates.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32, c: u32) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        (c as usize) * h * w + (y as usize) * w + (x as usize)
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the samples of one channel
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    #[inline]
    pub fn plane(&self, c: u32) -> &[f32] {
        let (start, end) = self.plane_range(c);
        &self.data[start..end]
    }

    /// Get the samples of one channel, mutably
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    #[inline]
    pub fn plane_mut(&mut self, c: u32) -> &mut [f32] {
        let (start, end) = self.plane_range(c);
        &mut self.data[start..end]
    }

    fn plane_range(&self, c: u32) -> (usize, usize) {
        assert!(
            c < self.channels,
            "channel {} out of range for {}-channel image",
            c,
            self.channels
        );
        let plane_len = (self.width as usize) * (self.height as usize);
        let start = (c as usize) * plane_len;
        (start, start + plane_len)
    }
}

fn sample_count(width: u32, height: u32, channels: u32) -> Result<usize> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION || channels > MAX_DIMENSION {
        return Err(Error::InvalidDimension {
            width,
            height,
            channels,
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or(Error::InvalidDimension {
            width,
            height,
            channels,
        })
}
