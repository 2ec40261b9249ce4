//! # Ripeness Scan
//!
//! A Rust crate for classifying watermelon ripeness from a single photograph.
//!
//! The classifier measures how much of the image falls into two fixed HSV
//! color bands and applies a fixed decision rule:
//! - Converting the BGR image to HSV (hue in the 0-180 half-range)
//! - Masking green rind and red flesh pixels
//! - Turning matched pixel counts into percentages of the image
//! - Mapping the percentages to a ripeness label with a confidence score
//!
//! ## Example
//!
//! ```rust,no_run
//! use ripeness_scan::{analyze_watermelon_file, Condition};
//! use std::path::Path;
//!
//! let result = analyze_watermelon_file(Path::new("melon.jpg"))?;
//! if result.condition == Condition::RipeWatermelon {
//!     println!("ripe ({:.0}%)", result.confidence * 100.0);
//! }
//! # Ok::<(), ripeness_scan::AnalysisError>(())
//! ```

use std::path::Path;

use log::debug;

pub mod error;
pub mod constants;
pub mod bgr_image;
pub mod color;
pub mod classification;
pub mod config;
pub mod image_loader;
pub mod upload;

pub use bgr_image::Image;
pub use classification::{classify, ClassificationResult, Condition};
pub use color::{ColorAnalyzer, ColorCoverage};
pub use config::ServiceConfig;
pub use error::{AnalysisError, Result};
pub use upload::{PredictionResponse, UploadHandler};

/// Measure red and green band coverage of an image
///
/// # Errors
///
/// Returns `AnalysisError::InvalidImageError` if the image does not have
/// three channels and non-zero dimensions.
pub fn analyze_coverage(image: &Image) -> Result<ColorCoverage> {
    ColorAnalyzer::new().coverage(image)
}

/// Classify the ripeness of a watermelon in a decoded BGR image
///
/// This is the main entry point. It is a pure function of the pixel data:
/// the same image always yields the same result.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidImageError` if the image does not have
/// three channels and non-zero dimensions. No partial result is produced.
pub fn analyze_watermelon(image: &Image) -> Result<ClassificationResult> {
    let coverage = analyze_coverage(image)?;
    let result = classify(coverage.red_percentage, coverage.green_percentage);

    debug!(
        "classified as {} (confidence {:.3})",
        result.condition, result.confidence
    );
    Ok(result)
}

/// Load an image file and classify it
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the file cannot be loaded or
/// decoded, in addition to the errors of [`analyze_watermelon`].
pub fn analyze_watermelon_file(image_path: &Path) -> Result<ClassificationResult> {
    let image = image_loader::load_image(image_path)?;
    analyze_watermelon(&image)
}
