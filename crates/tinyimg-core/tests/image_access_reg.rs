//! Pixel access regression test
//!
//! Checks the planar layout seen through `get_pixel`, the lenient edge
//! clamp on reads and the strict bounds check on writes.

use tinyimg_core::{Error, Image};
use tinyimg_test::RegParams;

/// Build a w x h x c image whose sample at (x, y, c) is `x + 10y + 100c`
fn make_ramp(w: u32, h: u32, c: u32) -> Image {
    let mut im = Image::new(w, h, c).unwrap();
    for k in 0..c as i32 {
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                im.set_pixel(x, y, k, (x + 10 * y + 100 * k) as f32);
            }
        }
    }
    im
}

#[test]
fn image_access_reg() {
    let mut rp = RegParams::new("image_access");

    let im = make_ramp(4, 3, 2);

    // --- Test 1: Planar storage order ---
    eprintln!("=== Planar layout ===");
    let data = im.data();
    rp.compare_values(24.0, data.len() as f64, 0.0);
    // plane 0 row 0, then plane 0 row 1, ..., then plane 1
    rp.compare_values(0.0, data[0] as f64, 0.0);
    rp.compare_values(3.0, data[3] as f64, 0.0);
    rp.compare_values(10.0, data[4] as f64, 0.0);
    rp.compare_values(100.0, data[12] as f64, 0.0);
    rp.compare_values(123.0, data[23] as f64, 0.0);
    rp.compare_values(112.0, im.get_pixel(2, 1, 1) as f64, 0.0);

    // --- Test 2: Reads past the far edge clamp ---
    eprintln!("=== Clamped reads ===");
    rp.compare_values(3.0, im.get_pixel(4, 0, 0) as f64, 0.0);
    rp.compare_values(3.0, im.get_pixel(100, 0, 0) as f64, 0.0);
    rp.compare_values(21.0, im.get_pixel(1, 3, 0) as f64, 0.0);
    rp.compare_values(101.0, im.get_pixel(1, 0, 2) as f64, 0.0);
    rp.compare_values(123.0, im.get_pixel(i32::MAX, i32::MAX, i32::MAX) as f64, 0.0);

    // Neighbourhood sweep that overshoots by one on the right/bottom
    let mut sum = 0.0f64;
    for y in 0..3 {
        for x in 0..4 {
            sum += (im.get_pixel(x + 1, y + 1, 0) - im.get_pixel(x, y, 0)) as f64;
        }
    }
    eprintln!("  forward difference sum: {}", sum);
    // 3 unit x-steps in each of 3 rows, 2 y-steps of 10 in each of 4 columns
    rp.compare_values(3.0 * 3.0 + 2.0 * 10.0 * 4.0, sum, 1e-9);

    // --- Test 3: Negative coordinates are rejected ---
    eprintln!("=== Negative coordinates ===");
    let errors = [
        im.try_get_pixel(-1, 0, 0),
        im.try_get_pixel(0, -1, 0),
        im.try_get_pixel(0, 0, -1),
    ];
    for result in &errors {
        let ok = matches!(result, Err(Error::NegativeCoordinate { .. }));
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 4: Writes outside the image are ignored ---
    eprintln!("=== Strict writes ===");
    let mut im2 = im.copy();
    for (x, y, c) in [
        (-1, 0, 0),
        (4, 0, 0),
        (0, -1, 0),
        (0, 3, 0),
        (0, 0, -1),
        (0, 0, 2),
    ] {
        im2.set_pixel(x, y, c, 999.0);
    }
    rp.compare_images(&im, &im2, 0.0);

    // --- Test 5: Stored values are floored at zero, not capped ---
    eprintln!("=== Value floor ===");
    im2.set_pixel(1, 1, 1, -0.5);
    im2.set_pixel(2, 2, 0, 7.5);
    rp.compare_values(0.0, im2.get_pixel(1, 1, 1) as f64, 0.0);
    rp.compare_values(7.5, im2.get_pixel(2, 2, 0) as f64, 0.0);

    assert!(rp.cleanup(), "image_access regression test failed");
}

#[test]
fn image_access_empty_reg() {
    let mut rp = RegParams::new("image_access_empty");

    for (w, h, c) in [(0, 4, 1), (4, 0, 3), (4, 4, 0)] {
        let im = Image::new(w, h, c).unwrap();
        rp.compare_values(0.0, im.len() as f64, 0.0);
        let ok = matches!(im.try_get_pixel(0, 0, 0), Err(Error::EmptyImage { .. }));
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

        // writes are silently dropped
        let mut im2 = im.clone();
        im2.set_pixel(0, 0, 0, 1.0);
        rp.compare_images(&im, &im2, 0.0);
    }

    assert!(rp.cleanup(), "image_access_empty regression test failed");
}

#[test]
#[should_panic(expected = "negative coordinate")]
fn test_get_pixel_negative_panics() {
    let im = make_ramp(2, 2, 1);
    let _ = im.get_pixel(0, -1, 0);
}
