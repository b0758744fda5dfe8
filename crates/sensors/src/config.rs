//! Sensor configuration

use crate::error::SensorError;
use crate::kind::SensorKind;
use crate::sensor::{Sensor, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

/// Declarative description of one sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Sensor identifier
    pub id: String,

    /// Number of readings averaged (default: 5)
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Offset added to each raw reading (default: 0.0)
    #[serde(default)]
    pub calibration_offset: f64,

    /// Kind and thresholds
    #[serde(flatten)]
    pub kind: SensorKind,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl SensorConfig {
    /// Build the sensor described by this config
    pub fn build(&self) -> Result<Sensor, SensorError> {
        Sensor::new(
            self.id.clone(),
            self.window_size,
            self.calibration_offset,
            self.kind,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_applied() {
        let config: SensorConfig = serde_json::from_str(
            r#"{"id":"T1","type":"temperature","high_threshold":90.0}"#,
        )
        .unwrap();

        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.calibration_offset, 0.0);

        let sensor = config.build().unwrap();
        assert_eq!(sensor.id(), "T1");
        assert_eq!(
            *sensor.kind(),
            SensorKind::Temperature {
                high_threshold: 90.0
            }
        );
    }

    #[test]
    fn test_config_build_errors() {
        let config = SensorConfig {
            id: "V1".to_string(),
            window_size: 0,
            calibration_offset: 0.0,
            kind: SensorKind::Vibration { rms_threshold: 2.5 },
        };
        assert!(config.build().is_err());
    }
}
