//! tinyimg core - Planar floating-point images
//!
//! This crate provides the data structure every other tinyimg crate works
//! on, plus the pixel-level primitives built directly on it:
//!
//! - [`Image`] - `width x height x channels` planar `f32` buffer
//! - Pixel access ([`image::access`]) - lenient `get_pixel`, strict `set_pixel`
//! - Utilities ([`image::ops`]) - copy, shift, scale, clamp
//! - [`channel`] - conventional channel indices for RGB and HSV images

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{Image, MAX_DIMENSION};

/// Conventional channel indices.
///
/// A 3-channel image is read as RGB by the color converters, and an
/// HSV-converted image reuses the same three slots for hue, saturation
/// and value.
pub mod channel {
    /// Red channel
    pub const RED: i32 = 0;
    /// Green channel
    pub const GREEN: i32 = 1;
    /// Blue channel
    pub const BLUE: i32 = 2;

    /// Hue channel of an HSV image
    pub const HUE: i32 = 0;
    /// Saturation channel of an HSV image
    pub const SATURATION: i32 = 1;
    /// Value channel of an HSV image
    pub const VALUE: i32 = 2;

    /// Single channel of a grayscale image
    pub const GRAY: i32 = 0;
}
