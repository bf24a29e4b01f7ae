//! Pixel access functions
//!
//! Two access modes with different edge rules:
//!
//! - [`Image::get_pixel`] samples leniently. Coordinates past the far edge
//!   of any axis are clamped to the last valid index, so edge-handling code
//!   whose loops overshoot by one still reads a value.
//! - [`Image::set_pixel`] writes strictly. Any coordinate that is negative
//!   or past the far edge turns the call into a no-op, and negative values
//!   are stored as zero.
//!
//! Coordinates are `i32` so that neighbourhood code can pass `x - 1` and
//! `x + 1` without casting. Negative coordinates are never clamped by
//! `get_pixel`: they are a caller bug and panic. Use
//! [`Image::try_get_pixel`] to get an error instead.

use super::Image;
use crate::error::{Error, Result};

impl Image {
    /// Sample the value at `(x, y, c)`, clamping past-the-edge coordinates.
    ///
    /// `x >= width` reads column `width - 1`, `y >= height` reads row
    /// `height - 1` and `c >= channels` reads channel `channels - 1`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is negative or if the image is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyimg_core::Image;
    ///
    /// let im = Image::from_data(2, 1, 1, vec![0.25, 0.5]).unwrap();
    /// assert_eq!(im.get_pixel(1, 0, 0), 0.5);
    /// assert_eq!(im.get_pixel(7, 3, 2), 0.5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get_pixel(&self, x: i32, y: i32, c: i32) -> f32 {
        match self.try_get_pixel(x, y, c) {
            Ok(v) => v,
            Err(e) => panic!("Image::get_pixel: {}", e),
        }
    }

    /// Fallible form of [`Image::get_pixel`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NegativeCoordinate` if any coordinate is negative and
    /// `Error::EmptyImage` if the image holds no samples.
    pub fn try_get_pixel(&self, x: i32, y: i32, c: i32) -> Result<f32> {
        if x < 0 || y < 0 || c < 0 {
            return Err(Error::NegativeCoordinate { x, y, c });
        }
        if self.is_empty() {
            return Err(Error::EmptyImage {
                width: self.width,
                height: self.height,
                channels: self.channels,
            });
        }

        let x = (x as u32).min(self.width - 1);
        let y = (y as u32).min(self.height - 1);
        let c = (c as u32).min(self.channels - 1);

        Ok(self.data[self.index_of(x, y, c)])
    }

    /// Write `value` at `(x, y, c)`.
    ///
    /// Does nothing if any coordinate is negative or not less than the
    /// corresponding dimension. Negative values are stored as `0.0`; there
    /// is no upper clamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyimg_core::Image;
    ///
    /// let mut im = Image::new(2, 2, 1).unwrap();
    /// im.set_pixel(0, 0, 0, -3.0);
    /// im.set_pixel(1, 1, 0, 4.0);
    /// im.set_pixel(2, 1, 0, 9.0); // rejected
    /// assert_eq!(im.data(), &[0.0, 0.0, 0.0, 4.0]);
    /// ```
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, c: i32, value: f32) {
        if !self.contains(x, y, c) {
            return;
        }

        let idx = self.index_of(x as u32, y as u32, c as u32);
        self.data[idx] = if value < 0.0 { 0.0 } else { value };
    }

    /// True if `(x, y, c)` addresses a sample of this image
    #[inline]
    pub fn contains(&self, x: i32, y: i32, c: i32) -> bool {
        x >= 0
            && y >= 0
            && c >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (c as u32) < self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32, channels: u32) -> Image {
        let n = (width * height * channels) as usize;
        let data = (0..n).map(|v| v as f32).collect();
        Image::from_data(width, height, channels, data).unwrap()
    }

    #[test]
    fn test_get_pixel_planar_offset() {
        let im = ramp(3, 2, 3);
        // c * h * w + y * w + x
        assert_eq!(im.get_pixel(0, 0, 0), 0.0);
        assert_eq!(im.get_pixel(2, 0, 0), 2.0);
        assert_eq!(im.get_pixel(0, 1, 0), 3.0);
        assert_eq!(im.get_pixel(1, 1, 2), 16.0);
    }

    #[test]
    fn test_get_pixel_clamps_far_edges() {
        let im = ramp(3, 2, 3);
        assert_eq!(im.get_pixel(3, 1, 1), im.get_pixel(2, 1, 1));
        assert_eq!(im.get_pixel(1, 2, 1), im.get_pixel(1, 1, 1));
        assert_eq!(im.get_pixel(1, 1, 3), im.get_pixel(1, 1, 2));
        assert_eq!(im.get_pixel(100, 100, 100), im.get_pixel(2, 1, 2));
    }

    #[test]
    fn test_try_get_pixel_negative() {
        let im = ramp(3, 2, 3);
        assert_eq!(
            im.try_get_pixel(-1, 0, 0),
            Err(Error::NegativeCoordinate { x: -1, y: 0, c: 0 })
        );
        assert!(im.try_get_pixel(0, -1, 0).is_err());
        assert!(im.try_get_pixel(0, 0, -1).is_err());
    }

    #[test]
    fn test_try_get_pixel_empty() {
        let im = Image::new(0, 4, 1).unwrap();
        assert!(matches!(
            im.try_get_pixel(0, 0, 0),
            Err(Error::EmptyImage { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "negative coordinate")]
    fn test_get_pixel_negative_panics() {
        let im = ramp(3, 2, 1);
        let _ = im.get_pixel(-1, 0, 0);
    }

    #[test]
    fn test_set_pixel_floors_at_zero() {
        let mut im = Image::new(2, 2, 1).unwrap();
        im.set_pixel(1, 0, 0, -0.5);
        assert_eq!(im.get_pixel(1, 0, 0), 0.0);
        im.set_pixel(1, 0, 0, 2.5);
        assert_eq!(im.get_pixel(1, 0, 0), 2.5);
    }

    #[test]
    fn test_set_pixel_rejects_out_of_range() {
        let mut im = Image::new_with_value(2, 2, 2, 0.5).unwrap();
        let before = im.clone();
        im.set_pixel(-1, 0, 0, 1.0);
        im.set_pixel(0, -1, 0, 1.0);
        im.set_pixel(0, 0, -1, 1.0);
        im.set_pixel(2, 0, 0, 1.0);
        im.set_pixel(0, 2, 0, 1.0);
        im.set_pixel(0, 0, 2, 1.0);
        assert_eq!(im, before);
    }

    #[test]
    fn test_contains() {
        let im = Image::new(2, 3, 1).unwrap();
        assert!(im.contains(1, 2, 0));
        assert!(!im.contains(2, 2, 0));
        assert!(!im.contains(1, 3, 0));
        assert!(!im.contains(1, 2, 1));
        assert!(!im.contains(-1, 0, 0));
    }
}
