//! Color space conversion
//!
//! Provides conversion between:
//! - RGB -> Grayscale (BT.601 luma)
//! - RGB <-> HSV (Hue, Saturation, Value)
//!
//! Every conversion exists at two levels: a pixel-level function on plain
//! `f32` values, and an image-level function over a 3-channel [`Image`].
//!
//! # Hue units
//!
//! Hue is a circular quantity. Both directions store it in *turns*: `0.0`
//! is red, `1/3` green, `2/3` blue, and `1.0` wraps back to red. Use
//! [`Hsv::from_degrees`] and [`Hsv::hue_degrees`] at the boundary when
//! working in degrees.

use crate::{ColorError, ColorResult};
use tinyimg_core::{Image, channel};
use tracing::debug;

/// Red weight of the BT.601 luma sum
pub const LUMA_R: f32 = 0.299;
/// Green weight of the BT.601 luma sum
pub const LUMA_G: f32 = 0.587;
/// Blue weight of the BT.601 luma sum
pub const LUMA_B: f32 = 0.114;

/// Width of one hue sector used to rebuild RGB from HSV
pub const HUE_SECTOR_DEGREES: f32 = 60.0;
/// One full turn of the hue circle
pub const HUE_FULL_TURN_DEGREES: f32 = 360.0;

const RGB_CHANNELS: u32 = 3;

/// HSV color representation
///
/// - `h`: Hue in turns, range [0.0, 1.0) (where 1.0 wraps to 0.0)
/// - `s`: Saturation, [0.0, 1.0] for valid RGB input
/// - `v`: Value, the largest RGB component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color with hue in turns
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Create a new HSV color with hue in degrees
    pub fn from_degrees(h_degrees: f32, s: f32, v: f32) -> Self {
        Self::new(h_degrees / HUE_FULL_TURN_DEGREES, s, v)
    }

    /// Hue in degrees, in [0, 360)
    pub fn hue_degrees(&self) -> f32 {
        (self.h * HUE_FULL_TURN_DEGREES).rem_euclid(HUE_FULL_TURN_DEGREES)
    }
}

/// Largest of three values.
///
/// Ties resolve in argument order: `a` wins over `c` and `b` wins over `c`
/// only when strictly greater.
#[inline]
pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c { a } else { c }
    } else if b > c {
        b
    } else {
        c
    }
}

/// Smallest of three values, with the same tie order as [`three_way_max`].
#[inline]
pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c { a } else { c }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Convert RGB to luma using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B. No clamping is applied.
#[inline]
pub fn rgb_to_gray(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Convert RGB values to HSV
///
/// Hue is returned in turns. Achromatic input (all components equal)
/// yields hue 0, and black (`V == 0`) yields saturation 0.
///
/// # Examples
///
/// ```
/// use tinyimg_color::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv(0.0, 1.0, 0.0);
/// assert!((hsv.h - 1.0 / 3.0).abs() < 1e-6);
/// assert_eq!((hsv.s, hsv.v), (1.0, 1.0));
/// ```
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let v = three_way_max(r, g, b);
    let m = three_way_min(r, g, b);
    let chroma = v - m;

    // S = C / V is undefined for black
    let s = if v == 0.0 { 0.0 } else { chroma / v };

    let raw = if chroma == 0.0 {
        0.0
    } else if v == r {
        (g - b) / chroma
    } else if v == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let h = if raw < 0.0 { raw / 6.0 + 1.0 } else { raw / 6.0 };

    Hsv { h, s, v }
}

/// Convert HSV values to RGB
///
/// Hue is read in turns and may lie outside [0, 1); it is wrapped onto the
/// circle first. The final 60° sector saturates, so every hue maps to a
/// color.
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let c = hsv.v * hsv.s;
    let h_prime = hsv.hue_degrees() / HUE_SECTOR_DEGREES;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = hsv.v - c;

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}

/// Convert an RGB image to a single-channel luma image
///
/// The output has the input's width and height and one channel. Values are
/// not clamped, so out-of-range input can produce out-of-range luma.
///
/// # Errors
///
/// Returns `ColorError::ChannelCount` unless the input has exactly 3
/// channels.
pub fn convert_to_gray(image: &Image) -> ColorResult<Image> {
    check_rgb(image)?;
    debug!(
        width = image.width(),
        height = image.height(),
        "convert_to_gray"
    );

    let mut gray = Image::new(image.width(), image.height(), 1)?;
    let (r, g, b) = (image.plane(0), image.plane(1), image.plane(2));
    for (i, out) in gray.plane_mut(0).iter_mut().enumerate() {
        *out = rgb_to_gray(r[i], g[i], b[i]);
    }

    Ok(gray)
}

/// Convert an RGB image to HSV, in place
///
/// Channels 0, 1, 2 are read as R, G, B and overwritten with H (in turns),
/// S and V. Writes go through [`Image::set_pixel`], so negative results are
/// stored as zero.
///
/// # Errors
///
/// Returns `ColorError::ChannelCount` unless the image has exactly 3
/// channels. The image is untouched in that case.
pub fn convert_rgb_to_hsv(image: &mut Image) -> ColorResult<()> {
    check_rgb(image)?;
    debug!(
        width = image.width(),
        height = image.height(),
        "convert_rgb_to_hsv"
    );

    // lossless: Image caps every dimension at MAX_DIMENSION
    for y in 0..image.height() as i32 {
        for x in 0..image.width() as i32 {
            let r = image.get_pixel(x, y, channel::RED);
            let g = image.get_pixel(x, y, channel::GREEN);
            let b = image.get_pixel(x, y, channel::BLUE);

            let hsv = rgb_to_hsv(r, g, b);

            image.set_pixel(x, y, channel::HUE, hsv.h);
            image.set_pixel(x, y, channel::SATURATION, hsv.s);
            image.set_pixel(x, y, channel::VALUE, hsv.v);
        }
    }

    Ok(())
}

/// Convert an HSV image back to RGB, in place
///
/// Expects H (in turns), S and V in channels 0, 1, 2, as written by
/// [`convert_rgb_to_hsv`].
///
/// # Errors
///
/// Returns `ColorError::ChannelCount` unless the image has exactly 3
/// channels. The image is untouched in that case.
pub fn convert_hsv_to_rgb(image: &mut Image) -> ColorResult<()> {
    check_rgb(image)?;
    debug!(
        width = image.width(),
        height = image.height(),
        "convert_hsv_to_rgb"
    );

    // lossless: Image caps every dimension at MAX_DIMENSION
    for y in 0..image.height() as i32 {
        for x in 0..image.width() as i32 {
            let hsv = Hsv::new(
                image.get_pixel(x, y, channel::HUE),
                image.get_pixel(x, y, channel::SATURATION),
                image.get_pixel(x, y, channel::VALUE),
            );

            let (r, g, b) = hsv_to_rgb(hsv);

            image.set_pixel(x, y, channel::RED, r);
            image.set_pixel(x, y, channel::GREEN, g);
            image.set_pixel(x, y, channel::BLUE, b);
        }
    }

    Ok(())
}

fn check_rgb(image: &Image) -> ColorResult<()> {
    if image.channels() != RGB_CHANNELS {
        return Err(ColorError::ChannelCount {
            expected: RGB_CHANNELS,
            actual: image.channels(),
        });
    }
    Ok(())
}
