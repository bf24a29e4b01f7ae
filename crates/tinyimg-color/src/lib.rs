//! tinyimg color - Color conversion for planar images
//!
//! This crate derives grayscale images and converts between RGB and HSV:
//!
//! - **Grayscale** ([`convert_to_gray`]): BT.601 luma into a new 1-channel image
//! - **RGB -> HSV** ([`convert_rgb_to_hsv`]): in place, hue stored in turns
//! - **HSV -> RGB** ([`convert_hsv_to_rgb`]): in place, inverse of the above
//!
//! All three require a 3-channel image and report
//! [`ColorError::ChannelCount`] otherwise.
//!
//! # Example
//!
//! ```
//! use tinyimg_color::{convert_hsv_to_rgb, convert_rgb_to_hsv};
//! use tinyimg_core::{Image, channel};
//!
//! let mut im = Image::from_data(1, 1, 3, vec![0.8, 0.4, 0.2]).unwrap();
//! convert_rgb_to_hsv(&mut im).unwrap();
//! im.scale(channel::SATURATION, 0.5);
//! convert_hsv_to_rgb(&mut im).unwrap();
//! assert!((im.get_pixel(0, 0, channel::RED) - 0.8).abs() < 1e-6);
//! ```

pub mod colorspace;
pub mod error;

// Re-export core types
pub use tinyimg_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    HUE_FULL_TURN_DEGREES, HUE_SECTOR_DEGREES, Hsv, LUMA_B, LUMA_G, LUMA_R, convert_hsv_to_rgb,
    convert_rgb_to_hsv, convert_to_gray, hsv_to_rgb, rgb_to_gray, rgb_to_hsv, three_way_max,
    three_way_min,
};
