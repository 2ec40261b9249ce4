//! Image loading for the classifier
//!
//! Decodes PNG and JPEG files (or in-memory buffers) with the `image` crate
//! and reorders channels into the BGR layout the classifier expects.

use crate::bgr_image::Image;
use crate::error::{AnalysisError, Result};
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    fn to_image_format(self) -> ::image::ImageFormat {
        match self {
            ImageFormat::Jpeg => ::image::ImageFormat::Jpeg,
            ImageFormat::Png => ::image::ImageFormat::Png,
        }
    }
}

/// Load an image from disk into a BGR [`Image`]
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if:
/// - The extension is not png, jpg or jpeg
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use ripeness_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("melon.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), ripeness_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<Image> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| AnalysisError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let reader = ::image::ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let decoded = reader
        .with_guessed_format()
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to read image file: {}", path.display()), e)
        })?
        .decode()
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
        })?;

    log::debug!("decoded {:?} image {}", format, path.display());
    Image::from_rgb(&decoded.to_rgb8())
}

/// Decode an in-memory PNG or JPEG buffer into a BGR [`Image`]
///
/// The format is detected from the buffer contents; `hint` takes precedence
/// when given.
pub fn load_image_from_memory(bytes: &[u8], hint: Option<ImageFormat>) -> Result<Image> {
    let decoded = match hint {
        Some(format) => ::image::load_from_memory_with_format(bytes, format.to_image_format()),
        None => ::image::load_from_memory(bytes),
    }
    .map_err(|e| AnalysisError::image_load("Failed to decode image buffer", e))?;

    Image::from_rgb(&decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(rgb: &::image::RgbImage) -> Vec<u8> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        rgb.write_to(&mut bytes, ::image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("melon.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("melon.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("melon.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("melon.heic")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("melon")), None);
    }

    #[test]
    fn test_load_from_memory_swaps_channels() {
        let rgb = ::image::RgbImage::from_pixel(3, 2, ::image::Rgb([255, 10, 0]));
        let image = load_image_from_memory(&encode_png(&rgb), None).unwrap();

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert!(image.pixels().all(|p| p == [0, 10, 255]));
    }

    #[test]
    fn test_load_from_memory_garbage() {
        let err = load_image_from_memory(b"not an image", None).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    }

    #[test]
    fn test_load_image_unknown_extension() {
        let err = load_image(Path::new("melon.gif")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("nonexistent_melon.png")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    }

    #[test]
    fn test_load_image_from_disk() {
        let dir = std::env::temp_dir().join(format!("ripeness_loader_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("green.png");

        let rgb = ::image::RgbImage::from_pixel(4, 4, ::image::Rgb([0, 255, 0]));
        std::fs::write(&path, encode_png(&rgb)).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!(image.pixel_count(), 16);
        assert_eq!(image.get(0, 0), Some([0, 255, 0]));

        std::fs::remove_dir_all(&dir).ok();
    }
}
