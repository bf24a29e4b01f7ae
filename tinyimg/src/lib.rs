//! tinyimg - Planar floating-point images for Rust
//!
//! # Overview
//!
//! tinyimg stores an image as `channels` planes of `width * height` `f32`
//! samples, with `[0, 1]` as the displayable range. On top of that it
//! provides:
//!
//! - Pixel access with a lenient read and a strict write path
//! - Copy, per-channel shift and scale, and global clamp
//! - BT.601 grayscale and in-place RGB <-> HSV conversion ([`color`])
//! - PNG, JPEG and PNM files ([`io`])
//!
//! # Example
//!
//! ```
//! use tinyimg::{Image, channel};
//! use tinyimg::color::{convert_hsv_to_rgb, convert_rgb_to_hsv};
//!
//! let mut im = Image::new_with_value(4, 4, 3, 0.0).unwrap();
//! im.shift(channel::RED, 1.0);
//!
//! convert_rgb_to_hsv(&mut im).unwrap();
//! // rotate the hue a third of a turn: red becomes green
//! im.shift(channel::HUE, 1.0 / 3.0);
//! convert_hsv_to_rgb(&mut im).unwrap();
//!
//! assert!(im.get_pixel(0, 0, channel::GREEN) > 0.999);
//! assert!(im.get_pixel(0, 0, channel::RED) < 1e-4);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tinyimg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tinyimg_color as color;
pub use tinyimg_io as io;
