//! Color band bounds and decision thresholds for ripeness classification
//!
//! These values are fixed design constants. Hue is expressed in the
//! half-range convention (0-180) used for 8-bit HSV storage; saturation
//! and value span 0-255.

/// HSV bounds for the color bands
pub mod bands {
    /// Green rind hue range
    pub const GREEN_HUE: (u8, u8) = (35, 85);

    /// Red flesh hue range at the low end of the hue circle
    pub const RED_HUE_LOW: (u8, u8) = (0, 10);

    /// Red flesh hue range at the high end of the hue circle
    pub const RED_HUE_HIGH: (u8, u8) = (170, 180);

    /// Saturation range shared by both bands
    pub const SATURATION: (u8, u8) = (50, 255);

    /// Value range shared by both bands
    pub const VALUE: (u8, u8) = (50, 255);
}

/// Percentage thresholds for the ripeness decision rule
pub mod thresholds {
    /// Red coverage must exceed this for a ripe verdict
    pub const RIPE_MIN_RED_PERCENT: f64 = 30.0;

    /// Green coverage must exceed this alongside red for a ripe verdict
    pub const RIPE_MIN_GREEN_PERCENT: f64 = 20.0;

    /// Green coverage must exceed this for an unripe verdict
    pub const UNRIPE_MIN_GREEN_PERCENT: f64 = 50.0;
}

/// Defaults for the upload intake layer
pub mod intake {
    /// Maximum accepted upload size (16 MiB)
    pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

    /// Folder uploaded images are stored in
    pub const UPLOAD_FOLDER: &str = "static/uploads";

    /// URL prefix under which stored uploads are served
    pub const URL_PREFIX: &str = "static/uploads";

    /// File extensions accepted for upload
    pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
}
