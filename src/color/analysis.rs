//! Band coverage measurement
//!
//! Converts an image to HSV once, masks it against the red and green bands
//! and reports each band's share of the total pixel count.

use log::debug;
use serde::{Deserialize, Serialize};

use super::band::{Mask, GREEN_BAND, RED_BAND};
use super::conversion::ColorConverter;
use crate::{bgr_image::Image, AnalysisError, Result};

/// Pixel counts and percentages for the red and green bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCoverage {
    /// Pixels inside the red band
    pub red_pixels: usize,
    /// Pixels inside the green band
    pub green_pixels: usize,
    /// Total pixel count (height x width)
    pub total_pixels: usize,
    /// Red pixels as a percentage of the total, in [0, 100]
    pub red_percentage: f64,
    /// Green pixels as a percentage of the total, in [0, 100]
    pub green_percentage: f64,
}

/// Share of `total` covered by `matched`, as a percentage
///
/// # Errors
///
/// Returns `AnalysisError::InvalidImageError` if `total` is zero.
pub fn percentage(matched: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(AnalysisError::invalid_image("total pixel count is zero"));
    }
    let matched = matched.min(total);
    Ok(matched as f64 * 100.0 / total as f64)
}

/// Measures red and green band coverage of an image
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAnalyzer {
    converter: ColorConverter,
}

impl ColorAnalyzer {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Percentage of pixels set in `mask`
    pub fn mask_percentage(&self, mask: &Mask, total_pixels: usize) -> Result<f64> {
        percentage(mask.count(), total_pixels)
    }

    /// Measure band coverage for a whole image
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImageError` if the image violates the
    /// three-channel, non-empty contract.
    pub fn coverage(&self, image: &Image) -> Result<ColorCoverage> {
        let hsv = self.converter.to_hsv(image)?;
        let total_pixels = image.pixel_count();

        let red_mask = RED_BAND.mask(&hsv);
        let green_mask = GREEN_BAND.mask(&hsv);

        let red_pixels = red_mask.count();
        let green_pixels = green_mask.count();

        let coverage = ColorCoverage {
            red_pixels,
            green_pixels,
            total_pixels,
            red_percentage: self.mask_percentage(&red_mask, total_pixels)?,
            green_percentage: self.mask_percentage(&green_mask, total_pixels)?,
        };

        debug!(
            "band coverage over {}x{}: red {:.2}% ({} px), green {:.2}% ({} px)",
            image.width(),
            image.height(),
            coverage.red_percentage,
            red_pixels,
            coverage.green_percentage,
            green_pixels
        );

        Ok(coverage)
    }
}
