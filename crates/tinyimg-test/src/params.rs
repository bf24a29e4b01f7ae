//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use std::fs;
use std::path::Path;
use tinyimg_core::Image;
use tinyimg_io::ImageFormat;
use tracing::warn;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognised means compare
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and every failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "shift")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images sample by sample
    ///
    /// # Arguments
    ///
    /// * `expected` - Reference image
    /// * `actual` - Computed image
    /// * `delta` - Maximum allowed per-sample difference
    ///
    /// # Returns
    ///
    /// `true` if geometry matches and every sample is within `delta`.
    pub fn compare_images(&mut self, expected: &Image, actual: &Image, delta: f32) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - geometry {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.record_failure(msg);
            return false;
        }

        match first_mismatch(expected, actual, delta) {
            None => true,
            Some(i) => {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - sample {} differs: \
                     expected {}, actual {}, allowed delta {}",
                    self.test_name,
                    self.index,
                    i,
                    expected.data()[i],
                    actual.data()[i],
                    delta
                );
                self.record_failure(msg);
                false
            }
        }
    }

    /// Write an image to the regout directory and check it against its
    /// golden file
    ///
    /// # Errors
    ///
    /// Returns `TestError::ImageWrite` if the image cannot be encoded, or
    /// `TestError::Io` if the golden file cannot be copied or read.
    pub fn write_image_and_check(&mut self, image: &Image, format: ImageFormat) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        tinyimg_io::write_image(image, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden. In compare mode, compares
    /// with the golden file, bootstrapping it if it does not exist yet.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    fs::copy(local_path, &golden_path)?;
                    warn!(golden = %golden_path, "golden file missing, generated from this run");
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !same_decoded_image(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.record_failure(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Index of the first sample pair further apart than `delta`
fn first_mismatch(a: &Image, b: &Image, delta: f32) -> Option<usize> {
    a.data()
        .iter()
        .zip(b.data())
        .position(|(&x, &y)| {
            let diff = (x - y).abs();
            diff.is_nan() || diff > delta
        })
}

/// Compare two encoded files by their decoded samples
fn same_decoded_image(path1: &str, path2: &str) -> bool {
    match (tinyimg_io::read_image(path1), tinyimg_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a.dimensions() == b.dimensions() && first_mismatch(&a, &b, 0.0).is_none(),
        _ => false,
    }
}
