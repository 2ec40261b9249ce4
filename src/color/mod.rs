//! Color conversion, band matching and coverage analysis
//!
//! This module converts BGR images to HSV, masks them against the fixed
//! red and green bands, and measures how much of the image each band covers.

pub mod conversion;
pub mod band;
pub mod analysis;

pub use conversion::{ColorConverter, HsvImage, HsvPixel};
pub use band::{ChannelRange, ColorBand, Mask, GREEN_BAND, RED_BAND};
pub use analysis::{ColorAnalyzer, ColorCoverage};
