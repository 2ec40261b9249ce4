//! Configuration for the upload intake layer.
//!
//! The classifier itself takes no configuration; its bands and thresholds are
//! fixed constants. This structure only controls where uploads are stored and
//! which uploads are accepted.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use ripeness_scan::ServiceConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ServiceConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ServiceConfig::default();
//! # Ok::<(), ripeness_scan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::intake;
use crate::error::{AnalysisError, Result};

/// Upload intake settings, passed explicitly to [`crate::UploadHandler`].
///
/// Missing fields in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory uploaded images are written to
    pub upload_folder: PathBuf,

    /// Maximum accepted upload size in bytes
    pub max_content_length: usize,

    /// Accepted file extensions, lowercase, without the leading dot
    pub allowed_extensions: Vec<String>,

    /// URL prefix reported in responses for stored images
    pub url_prefix: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upload_folder: PathBuf::from(intake::UPLOAD_FOLDER),
            max_content_length: intake::MAX_CONTENT_LENGTH,
            allowed_extensions: intake::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            url_prefix: intake::URL_PREFIX.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Default configuration storing uploads in `folder`
    pub fn with_upload_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            upload_folder: folder.into(),
            ..Self::default()
        }
    }

    /// Check whether a file name carries an allowed extension (case-insensitive)
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })
    }
}
