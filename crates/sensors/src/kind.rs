//! Sensor kinds and their alert predicates

use serde::{Deserialize, Serialize};

/// Default temperature alert threshold
pub const DEFAULT_HIGH_THRESHOLD: f64 = 80.0;
/// Default vibration alert threshold
pub const DEFAULT_RMS_THRESHOLD: f64 = 2.5;
/// Default lower bound of the pressure band
pub const DEFAULT_MIN_PRESSURE: f64 = 1.0;
/// Default upper bound of the pressure band
pub const DEFAULT_MAX_PRESSURE: f64 = 100.0;

/// Kind of physical sensor, carrying its own thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorKind {
    /// Alerts when the average reaches the high threshold
    Temperature { high_threshold: f64 },
    /// Alerts when the magnitude of the signed average reaches the threshold.
    ///
    /// The threshold is compared against `|average|`, not against the RMS of
    /// the window; see [`crate::Sensor::rms`].
    Vibration { rms_threshold: f64 },
    /// Alerts when the average leaves the inclusive `[min, max]` band
    Pressure { min_threshold: f64, max_threshold: f64 },
}

impl SensorKind {
    /// Evaluate the alert predicate for a window average
    pub fn is_breached(&self, average: f64) -> bool {
        match *self {
            SensorKind::Temperature { high_threshold } => average >= high_threshold,
            SensorKind::Vibration { rms_threshold } => average.abs() >= rms_threshold,
            SensorKind::Pressure {
                min_threshold,
                max_threshold,
            } => !(min_threshold <= average && average <= max_threshold),
        }
    }

    /// Whether every threshold is a finite number
    pub fn has_finite_thresholds(&self) -> bool {
        match *self {
            SensorKind::Temperature { high_threshold } => high_threshold.is_finite(),
            SensorKind::Vibration { rms_threshold } => rms_threshold.is_finite(),
            SensorKind::Pressure {
                min_threshold,
                max_threshold,
            } => min_threshold.is_finite() && max_threshold.is_finite(),
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature { .. } => "temperature",
            SensorKind::Vibration { .. } => "vibration",
            SensorKind::Pressure { .. } => "pressure",
        }
    }
}
