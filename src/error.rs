//! Error types for the ripeness_scan library

use thiserror::Error;

/// Result type alias for ripeness_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for ripeness analysis and image intake
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image violates the classifier's input contract
    /// (three channels, non-zero dimensions, matching buffer length)
    #[error("Invalid image: {reason}")]
    InvalidImageError { reason: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Uploaded file has an extension outside the allowed set
    #[error("Unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    /// Upload carried no usable file name
    #[error("No file selected")]
    NoFileSelected,

    /// Upload exceeds the configured content length
    #[error("Payload too large: {size} bytes (limit: {limit} bytes)")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Uploaded file could not be written to the upload folder
    #[error("Storage error: {message}")]
    StorageError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an invalid image error
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImageError {
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a storage error with context
    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::StorageError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the caller can fix this error by resubmitting a different file
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::UnsupportedFormat { .. }
                | AnalysisError::NoFileSelected
                | AnalysisError::PayloadTooLarge { .. }
                | AnalysisError::ImageLoadError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoFileSelected => "No file selected".to_string(),
            AnalysisError::UnsupportedFormat { .. } => {
                "Invalid file format. Only PNG, JPG, and JPEG are allowed.".to_string()
            }
            AnalysisError::PayloadTooLarge { limit, .. } => {
                format!(
                    "File is too large. The maximum upload size is {:.1} MB.",
                    *limit as f64 / (1024.0 * 1024.0)
                )
            }
            AnalysisError::ImageLoadError { .. } | AnalysisError::InvalidImageError { .. } => {
                "Could not read the image. Please check the file and try again.".to_string()
            }
            _ => "Ripeness analysis failed. Please try again later.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_display() {
        let err = AnalysisError::invalid_image("expected 3 channels, got 1");
        assert_eq!(err.to_string(), "Invalid image: expected 3 channels, got 1");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_upload_errors_are_recoverable() {
        assert!(AnalysisError::NoFileSelected.is_recoverable());
        assert!(AnalysisError::UnsupportedFormat {
            filename: "melon.gif".into()
        }
        .is_recoverable());
        assert!(AnalysisError::PayloadTooLarge { size: 20, limit: 10 }.is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        let err = AnalysisError::UnsupportedFormat {
            filename: "melon.bmp".into(),
        };
        assert_eq!(
            err.user_message(),
            "Invalid file format. Only PNG, JPG, and JPEG are allowed."
        );

        let err = AnalysisError::PayloadTooLarge {
            size: 20 * 1024 * 1024,
            limit: 16 * 1024 * 1024,
        };
        assert!(err.user_message().contains("16.0 MB"));
    }

    #[test]
    fn test_storage_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AnalysisError::storage("cannot write upload", io);
        assert!(err.source().is_some());
    }
}
