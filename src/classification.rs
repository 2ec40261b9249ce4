//! Ripeness decision rule
//!
//! Maps red and green band percentages to a ripeness label, a confidence
//! score and an explanation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::thresholds::{
    RIPE_MIN_GREEN_PERCENT, RIPE_MIN_RED_PERCENT, UNRIPE_MIN_GREEN_PERCENT,
};

/// Ripeness verdict for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Ripe Watermelon")]
    RipeWatermelon,
    #[serde(rename = "Unripe Watermelon")]
    UnripeWatermelon,
    #[serde(rename = "No Watermelon Detected")]
    NoWatermelonDetected,
}

impl Condition {
    /// Display label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Condition::RipeWatermelon => "Ripe Watermelon",
            Condition::UnripeWatermelon => "Unripe Watermelon",
            Condition::NoWatermelonDetected => "No Watermelon Detected",
        }
    }

    /// Explanation attached to results with this condition
    pub fn details(&self) -> &'static str {
        match self {
            Condition::RipeWatermelon => {
                "ripe watermelon: red flesh and green rind both detected."
            }
            Condition::UnripeWatermelon => "unripe watermelon: only green rind detected.",
            Condition::NoWatermelonDetected => "no watermelon detected in the image.",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification outcome for one image
///
/// `confidence` is the triggering band percentage rescaled to [0, 1]. It is
/// not a calibrated probability; higher only means a stronger color match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub condition: Condition,
    pub confidence: f32,
    pub details: String,
}

impl ClassificationResult {
    fn new(condition: Condition, confidence: f64) -> Self {
        Self {
            condition,
            confidence: confidence.clamp(0.0, 1.0) as f32,
            details: condition.details().to_string(),
        }
    }
}

/// Apply the ripeness decision rule to band percentages
///
/// Branches are evaluated in order and the first match wins. The ripe and
/// unripe ranges overlap (red > 30 with green > 50 satisfies both), so the
/// ripe branch must stay first.
pub fn classify(red_percentage: f64, green_percentage: f64) -> ClassificationResult {
    match (red_percentage, green_percentage) {
        (red, green) if red > RIPE_MIN_RED_PERCENT && green > RIPE_MIN_GREEN_PERCENT => {
            ClassificationResult::new(Condition::RipeWatermelon, red / 100.0)
        }
        (_, green) if green > UNRIPE_MIN_GREEN_PERCENT => {
            ClassificationResult::new(Condition::UnripeWatermelon, green / 100.0)
        }
        _ => ClassificationResult::new(Condition::NoWatermelonDetected, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripe_branch() {
        let result = classify(40.0, 25.0);
        assert_eq!(result.condition, Condition::RipeWatermelon);
        assert!((result.confidence - 0.40).abs() < 1e-6);
        assert_eq!(
            result.details,
            "ripe watermelon: red flesh and green rind both detected."
        );
    }

    #[test]
    fn test_unripe_branch() {
        let result = classify(0.0, 100.0);
        assert_eq!(result.condition, Condition::UnripeWatermelon);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.details, "unripe watermelon: only green rind detected.");
    }

    #[test]
    fn test_no_watermelon_branch() {
        let result = classify(10.0, 10.0);
        assert_eq!(result.condition, Condition::NoWatermelonDetected);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.details, "no watermelon detected in the image.");
    }

    #[test]
    fn test_red_threshold_is_exclusive() {
        assert_ne!(classify(30.0, 25.0).condition, Condition::RipeWatermelon);
        assert_eq!(classify(30.01, 25.0).condition, Condition::RipeWatermelon);
    }

    #[test]
    fn test_red_threshold_compared_in_double_precision() {
        let red = 30.000_000_909;
        assert_eq!(classify(red, 27.27).condition, Condition::RipeWatermelon);
    }

    #[test]
    fn test_green_thresholds_are_exclusive() {
        assert_ne!(classify(40.0, 20.0).condition, Condition::RipeWatermelon);
        assert_eq!(classify(0.0, 50.0).condition, Condition::NoWatermelonDetected);
        assert_eq!(classify(0.0, 50.5).condition, Condition::UnripeWatermelon);
    }

    #[test]
    fn test_ripe_takes_precedence_over_unripe() {
        let result = classify(35.0, 60.0);
        assert_eq!(result.condition, Condition::RipeWatermelon);
        assert!((result.confidence - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_red_without_rind_falls_through() {
        // Plenty of red but no rind: not ripe, and too little green for unripe
        assert_eq!(classify(90.0, 5.0).condition, Condition::NoWatermelonDetected);
    }

    #[test]
    fn test_confidence_bounded() {
        for red in (0..=100).step_by(5) {
            for green in (0..=100).step_by(5) {
                let result = classify(red as f64, green as f64);
                assert!((0.0..=1.0).contains(&result.confidence));
            }
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = classify(40.0, 25.0);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["condition"], "Ripe Watermelon");
        assert_eq!(
            json["details"],
            "ripe watermelon: red flesh and green rind both detected."
        );

        let back: ClassificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(Condition::NoWatermelonDetected.to_string(), "No Watermelon Detected");
        assert_eq!(Condition::UnripeWatermelon.label(), "Unripe Watermelon");
    }
}
