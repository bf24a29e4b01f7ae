//! tinyimg-test - Regression test framework for tinyimg
//!
//! Each regression test creates a [`RegParams`], records a sequence of
//! numbered checks against it, and asserts on [`RegParams::cleanup`] at the
//! end. Three modes are supported:
//!
//! - **Generate**: Write golden files for later comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run checks without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use tinyimg_test::RegParams;
//!
//! let mut rp = RegParams::new("shift");
//! rp.compare_values(0.75, im.get_pixel(0, 0, 1) as f64, 1e-6);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use tinyimg_core::Image;

/// Read an image previously written under the regout directory
///
/// # Arguments
///
/// * `name` - File name relative to [`regout_dir`]
pub fn load_regout_image(name: &str) -> TestResult<Image> {
    let path = format!("{}/{}", regout_dir(), name);
    tinyimg_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // tinyimg-test is at crates/tinyimg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
