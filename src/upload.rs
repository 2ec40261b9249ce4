//! Upload intake: validate, store and classify submitted images
//!
//! The handler checks a submitted file against the [`ServiceConfig`],
//! writes it to the upload folder under a sanitized name, runs the
//! classifier and packages the result together with the stored image path.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classification::ClassificationResult;
use crate::config::ServiceConfig;
use crate::error::{AnalysisError, Result};
use crate::image_loader::{self, ImageFormat};

/// Response returned for an accepted upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Condition label, e.g. "Ripe Watermelon"
    pub class: String,
    pub confidence: f32,
    pub details: String,
    /// URL path of the stored image
    pub image_path: String,
}

impl PredictionResponse {
    fn new(result: ClassificationResult, image_path: String) -> Self {
        Self {
            class: result.condition.label().to_string(),
            confidence: result.confidence,
            details: result.details,
            image_path,
        }
    }
}

/// Reduce a client-supplied file name to a safe flat name
///
/// Non-ASCII characters are dropped, path separators become underscores,
/// whitespace runs collapse to a single underscore and only
/// `[A-Za-z0-9._-]` survives. Leading and trailing dots and underscores
/// are stripped, so the result never names a parent or hidden file. May
/// return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let flattened: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Validates, stores and classifies uploaded images
#[derive(Debug, Clone)]
pub struct UploadHandler {
    config: ServiceConfig,
}

impl UploadHandler {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Check an upload without touching the filesystem
    ///
    /// Returns the sanitized file name on success.
    pub fn validate(&self, filename: &str, size: usize) -> Result<String> {
        // The body limit applies before the request is looked at
        if size > self.config.max_content_length {
            return Err(AnalysisError::PayloadTooLarge {
                size,
                limit: self.config.max_content_length,
            });
        }
        if filename.is_empty() {
            return Err(AnalysisError::NoFileSelected);
        }
        if !self.config.is_allowed_file(filename) {
            return Err(AnalysisError::UnsupportedFormat {
                filename: filename.to_string(),
            });
        }

        let safe = secure_filename(filename);
        // A name like "../.png" can sanitize down to a bare extension
        if safe.is_empty() || !self.config.is_allowed_file(&safe) {
            return Err(AnalysisError::NoFileSelected);
        }
        Ok(safe)
    }

    /// Write validated bytes into the upload folder
    pub fn store(&self, safe_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let folder = &self.config.upload_folder;
        std::fs::create_dir_all(folder).map_err(|e| {
            AnalysisError::storage(format!("Failed to create {}", folder.display()), e)
        })?;

        let path = folder.join(safe_name);
        std::fs::write(&path, bytes).map_err(|e| {
            AnalysisError::storage(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(path)
    }

    /// URL path under which a stored file is served
    pub fn public_path(&self, safe_name: &str) -> String {
        let prefix = self.config.url_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{}", safe_name)
        } else {
            format!("/{}/{}", prefix, safe_name)
        }
    }

    /// Validate, store and classify one uploaded image
    ///
    /// # Errors
    ///
    /// - `PayloadTooLarge` when `bytes` exceeds the configured limit, checked
    ///   before anything else
    /// - `NoFileSelected` for an empty or unusable file name
    /// - `UnsupportedFormat` for extensions outside the allowed set
    /// - `StorageError` when the file cannot be written
    /// - `ImageLoadError` / `InvalidImageError` when the bytes do not decode
    pub fn handle(&self, filename: &str, bytes: &[u8]) -> Result<PredictionResponse> {
        let safe_name = self.validate(filename, bytes.len()).map_err(|e| {
            warn!("rejected upload {:?}: {}", filename, e);
            e
        })?;

        let stored = self.store(&safe_name, bytes)?;
        info!("stored upload {} ({} bytes)", stored.display(), bytes.len());

        let hint = ImageFormat::from_extension(&stored);
        let image = image_loader::load_image_from_memory(bytes, hint)?;
        let result = crate::analyze_watermelon(&image)?;

        Ok(PredictionResponse::new(result, self.public_path(&safe_name)))
    }
}
