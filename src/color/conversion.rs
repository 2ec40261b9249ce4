//! BGR to HSV conversion in the 8-bit half-range hue convention
//!
//! Matches the integer path common image libraries use for 8-bit HSV:
//! - value = max(b, g, r)
//! - saturation = diff * round(255 * 2^12 / value), rounded back down by 2^12
//! - hue = sector offset * round(180 * 2^12 / (6 * diff)), same rounding,
//!   wrapped into [0, 180)
//!
//! The reciprocal tables are built at compile time, so no floating point
//! enters the per-pixel path and band edges land on the same byte values.

use crate::{bgr_image::Image, AnalysisError, Result};

const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);
const HUE_RANGE: i32 = 180;

/// `round((255 << 12) / i)` for i in 1..=255, 0 at index 0
const SATURATION_DIV: [i32; 256] = reciprocal_table(255 << HSV_SHIFT);

/// `round((180 << 12) / (6 * i))` for i in 1..=255, 0 at index 0
const HUE_DIV: [i32; 256] = reciprocal_table((HUE_RANGE << HSV_SHIFT) / 6);

const fn reciprocal_table(numerator: i32) -> [i32; 256] {
    let mut table = [0i32; 256];
    let mut i = 1;
    while i < 256 {
        // Round to nearest; no entry of either table falls on a tie
        table[i] = (2 * numerator + i as i32) / (2 * i as i32);
        i += 1;
    }
    table
}

/// A single pixel in HSV space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HsvPixel {
    /// Hue in [0, 180)
    pub h: u8,
    /// Saturation in [0, 255]
    pub s: u8,
    /// Value in [0, 255]
    pub v: u8,
}

impl HsvPixel {
    pub fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Full-image HSV buffer with the same dimensions as its source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<HsvPixel>,
}

impl HsvImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order
    pub fn pixels(&self) -> &[HsvPixel] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// Converts BGR images into HSV buffers
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert one BGR pixel to HSV
    ///
    /// # Arguments
    ///
    /// * `b`, `g`, `r` - channel intensities in [0, 255]
    pub fn bgr_to_hsv(&self, b: u8, g: u8, r: u8) -> HsvPixel {
        let (b, g, r) = (b as i32, g as i32, r as i32);
        let v = b.max(g).max(r);
        let diff = v - b.min(g).min(r);

        let s = (diff * SATURATION_DIV[v as usize] + HSV_ROUND) >> HSV_SHIFT;

        // Red wins ties with green, green wins ties with blue
        let sector = if v == r {
            g - b
        } else if v == g {
            b - r + 2 * diff
        } else {
            r - g + 4 * diff
        };
        let mut h = (sector * HUE_DIV[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
        if h < 0 {
            h += HUE_RANGE;
        }

        HsvPixel {
            h: h as u8,
            s: s as u8,
            v: v as u8,
        }
    }

    /// Convert a whole image to an HSV buffer of identical dimensions
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImageError` if the image has no pixels
    /// or does not carry exactly three channels.
    pub fn to_hsv(&self, image: &Image) -> Result<HsvImage> {
        if image.channels() != 3 {
            return Err(AnalysisError::invalid_image(format!(
                "expected 3 channels, got {}",
                image.channels()
            )));
        }
        if image.pixel_count() == 0 {
            return Err(AnalysisError::invalid_image("image has no pixels"));
        }

        let pixels = image
            .pixels()
            .map(|[b, g, r]| self.bgr_to_hsv(b, g, r))
            .collect();

        Ok(HsvImage {
            width: image.width(),
            height: image.height(),
            pixels,
        })
    }
}
