//! HSV editing regression test
//!
//! Adjusts individual HSV channels between the two conversions, the way a
//! caller would desaturate or darken an image.

use tinyimg_color::{Hsv, convert_hsv_to_rgb, convert_rgb_to_hsv, hsv_to_rgb, rgb_to_hsv};
use tinyimg_core::{Image, channel};
use tinyimg_test::RegParams;

fn make_uniform_rgb(r: f32, g: f32, b: f32, w: u32, h: u32) -> Image {
    let mut im = Image::new(w, h, 3).unwrap();
    im.plane_mut(0).fill(r);
    im.plane_mut(1).fill(g);
    im.plane_mut(2).fill(b);
    im
}

#[test]
fn colorspace_hsv_reg() {
    let mut rp = RegParams::new("colorspace_hsv");

    // --- Test 1: Desaturate ---
    eprintln!("=== Desaturate ===");
    let mut im = make_uniform_rgb(0.8, 0.4, 0.2, 8, 8);
    convert_rgb_to_hsv(&mut im).unwrap();
    im.scale(channel::SATURATION, 0.0);
    convert_hsv_to_rgb(&mut im).unwrap();
    for c in 0..3 {
        rp.compare_values(0.8, im.get_pixel(3, 3, c) as f64, 1e-6);
    }

    // --- Test 2: Darken through V ---
    eprintln!("=== Darken ===");
    let mut im = make_uniform_rgb(0.8, 0.4, 0.2, 8, 8);
    convert_rgb_to_hsv(&mut im).unwrap();
    im.scale(channel::VALUE, 0.5);
    convert_hsv_to_rgb(&mut im).unwrap();
    rp.compare_values(0.4, im.get_pixel(0, 0, channel::RED) as f64, 1e-5);
    rp.compare_values(0.2, im.get_pixel(0, 0, channel::GREEN) as f64, 1e-5);
    rp.compare_values(0.1, im.get_pixel(0, 0, channel::BLUE) as f64, 1e-5);

    // --- Test 3: Rotate hue by a third of a turn ---
    eprintln!("=== Hue rotation ===");
    let mut im = make_uniform_rgb(1.0, 0.0, 0.0, 4, 4);
    convert_rgb_to_hsv(&mut im).unwrap();
    im.shift(channel::HUE, 1.0 / 3.0);
    convert_hsv_to_rgb(&mut im).unwrap();
    rp.compare_values(0.0, im.get_pixel(1, 1, channel::RED) as f64, 1e-5);
    rp.compare_values(1.0, im.get_pixel(1, 1, channel::GREEN) as f64, 1e-5);
    rp.compare_values(0.0, im.get_pixel(1, 1, channel::BLUE) as f64, 1e-5);

    // Hue pushed past a full turn wraps around
    let mut im = make_uniform_rgb(0.0, 0.0, 1.0, 4, 4);
    convert_rgb_to_hsv(&mut im).unwrap();
    im.shift(channel::HUE, 2.0 / 3.0);
    convert_hsv_to_rgb(&mut im).unwrap();
    rp.compare_values(0.0, im.get_pixel(0, 0, channel::RED) as f64, 1e-5);
    rp.compare_values(1.0, im.get_pixel(0, 0, channel::GREEN) as f64, 1e-5);
    rp.compare_values(0.0, im.get_pixel(0, 0, channel::BLUE) as f64, 1e-5);

    // --- Test 4: Pixel and image paths agree ---
    eprintln!("=== Pixel vs image ===");
    let colors = [(0.1, 0.7, 0.3), (0.95, 0.95, 0.2), (0.0, 0.0, 0.0)];
    for (r, g, b) in colors {
        let mut im = make_uniform_rgb(r, g, b, 1, 1);
        convert_rgb_to_hsv(&mut im).unwrap();
        let hsv = rgb_to_hsv(r, g, b);
        rp.compare_values(hsv.h as f64, im.get_pixel(0, 0, 0) as f64, 0.0);
        rp.compare_values(hsv.s as f64, im.get_pixel(0, 0, 1) as f64, 0.0);
        rp.compare_values(hsv.v as f64, im.get_pixel(0, 0, 2) as f64, 0.0);
    }

    // Degrees at the boundary
    let (r, g, b) = hsv_to_rgb(Hsv::from_degrees(30.0, 1.0, 1.0));
    rp.compare_values(1.0, r as f64, 1e-6);
    rp.compare_values(0.5, g as f64, 1e-6);
    rp.compare_values(0.0, b as f64, 1e-6);

    assert!(rp.cleanup(), "colorspace_hsv regression test failed");
}
