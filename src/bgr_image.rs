//! In-memory BGR image consumed by the classifier
//!
//! The classifier works on interleaved 8-bit pixels in blue, green, red
//! order, the common channel order of image I/O libraries. Construction
//! validates the buffer so every `Image` satisfies the classifier's input
//! contract.

use crate::error::{AnalysisError, Result};

/// Number of interleaved channels per pixel
pub const CHANNELS: usize = 3;

/// Decoded image with interleaved BGR pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Build an image from a raw interleaved buffer
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImageError` if:
    /// - `channels` is not 3
    /// - width or height is zero
    /// - `data.len()` does not equal `width * height * channels`
    pub fn from_raw(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != CHANNELS {
            return Err(AnalysisError::invalid_image(format!(
                "expected {} channels, got {}",
                CHANNELS, channels
            )));
        }
        if width == 0 || height == 0 {
            return Err(AnalysisError::invalid_image(format!(
                "image dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(AnalysisError::invalid_image(format!(
                "buffer holds {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                CHANNELS
            )));
        }

        Ok(Self { width, height, data })
    }

    /// Build an image from BGR rows, one `[b, g, r]` triple per pixel
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(AnalysisError::invalid_image(format!(
                "row {} has {} pixels, expected {}",
                row,
                rows[row].len(),
                width
            )));
        }

        let data = rows.iter().flatten().flatten().copied().collect();
        Self::from_raw(width as u32, height as u32, CHANNELS, data)
    }

    /// Build an image filled with a single BGR color
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Result<Self> {
        let pixels = width as usize * height as usize;
        let data = bgr.repeat(pixels);
        Self::from_raw(width, height, CHANNELS, data)
    }

    /// Build a BGR image from an RGB buffer produced by the `image` crate
    pub fn from_rgb(rgb: &::image::RgbImage) -> Result<Self> {
        let (width, height) = rgb.dimensions();
        let data = rgb
            .pixels()
            .flat_map(|p| [p[2], p[1], p[0]])
            .collect();
        Self::from_raw(width, height, CHANNELS, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel (always 3)
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// Total pixel count (height x width)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterate pixels as `[b, g, r]` triples in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| [p[0], p[1], p[2]])
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }
}
