//! Whole-image utilities
//!
//! Copy, per-channel constant shift and scale, and global value clamp.
//! Shift and scale route every write through [`Image::set_pixel`], so their
//! results are floored at zero but never clamped above. Use
//! [`Image::clamp`] to bring an image back into the displayable `[0, 1]`
//! range.

use super::Image;
use tracing::{debug, trace};

impl Image {
    /// Duplicate the image into freshly allocated storage.
    ///
    /// The result has identical geometry and samples and shares nothing
    /// with `self`.
    pub fn copy(&self) -> Image {
        trace!(
            width = self.width,
            height = self.height,
            channels = self.channels,
            "copy"
        );
        let mut copy = self.create_template();
        copy.data.copy_from_slice(&self.data);
        copy
    }

    /// Add `delta` to every pixel of one channel, in place.
    ///
    /// Does nothing if `channel >= channels`. Results below zero are stored
    /// as zero.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is negative and the image is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyimg_core::Image;
    ///
    /// let mut im = Image::new_with_value(2, 2, 3, 0.5).unwrap();
    /// im.shift(1, 0.25);
    /// im.shift(2, -1.0);
    /// assert_eq!(im.get_pixel(0, 0, 0), 0.5);
    /// assert_eq!(im.get_pixel(0, 0, 1), 0.75);
    /// assert_eq!(im.get_pixel(0, 0, 2), 0.0);
    /// ```
    pub fn shift(&mut self, channel: i32, delta: f32) {
        if i64::from(channel) >= i64::from(self.channels) {
            return;
        }
        debug!(
            width = self.width,
            height = self.height,
            channel,
            delta,
            "shift"
        );
        self.map_channel(channel, |v| v + delta);
    }

    /// Multiply every pixel of one channel by `factor`, in place.
    ///
    /// Same guards and zero floor as [`Image::shift`]. On an HSV image,
    /// scaling channel 1 adjusts saturation.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is negative and the image is not empty.
    pub fn scale(&mut self, channel: i32, factor: f32) {
        if i64::from(channel) >= i64::from(self.channels) {
            return;
        }
        debug!(
            width = self.width,
            height = self.height,
            channel,
            factor,
            "scale"
        );
        self.map_channel(channel, |v| v * factor);
    }

    /// Force every sample into `[0, 1]`, in place.
    ///
    /// NaN samples become `0.0`. Applying it twice gives the same result as
    /// applying it once.
    pub fn clamp(&mut self) {
        debug!(
            width = self.width,
            height = self.height,
            channels = self.channels,
            "clamp"
        );
        for v in &mut self.data {
            if *v > 1.0 {
                *v = 1.0;
            }
            if *v < 0.0 || v.is_nan() {
                *v = 0.0;
            }
        }
    }

    /// Read-modify-write every pixel of `channel` through the access layer
    ///
    /// Dimensions are bounded by `MAX_DIMENSION`, so the `i32` casts are
    /// lossless.
    fn map_channel(&mut self, channel: i32, f: impl Fn(f32) -> f32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let v = self.get_pixel(x, y, channel);
                self.set_pixel(x, y, channel, f(v));
            }
        }
    }
}
