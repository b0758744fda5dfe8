//! Monitor settings

use crate::error::MonitorError;
use alerting::NotifierConfig;
use config::{Config, Environment, File};
use sensors::{SensorConfig, SensorKind, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Environment variable prefix for overrides, e.g. `SENSOR_WATCH__EVALUATION_INTERVAL_MS`
pub const ENV_PREFIX: &str = "SENSOR_WATCH";

/// Fleet and scheduling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Sensors, in evaluation order
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,

    /// Notifiers, in dispatch order
    #[serde(default)]
    pub notifiers: Vec<NotifierConfig>,

    /// Time between evaluation cycles (default: 1000ms)
    #[serde(default = "default_interval_ms")]
    pub evaluation_interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    1000
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sensors: vec![
                SensorConfig {
                    id: "T1".to_string(),
                    window_size: DEFAULT_WINDOW_SIZE,
                    calibration_offset: 0.0,
                    kind: SensorKind::Temperature {
                        high_threshold: 80.0,
                    },
                },
                SensorConfig {
                    id: "V1".to_string(),
                    window_size: DEFAULT_WINDOW_SIZE,
                    calibration_offset: 0.0,
                    kind: SensorKind::Vibration { rms_threshold: 2.5 },
                },
                SensorConfig {
                    id: "P1".to_string(),
                    window_size: DEFAULT_WINDOW_SIZE,
                    calibration_offset: 0.0,
                    kind: SensorKind::Pressure {
                        min_threshold: 1.0,
                        max_threshold: 100.0,
                    },
                },
            ],
            notifiers: vec![NotifierConfig::Email {
                recipient: "ops@example.com".to_string(),
            }],
            evaluation_interval_ms: default_interval_ms(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a file, with environment overrides.
    ///
    /// Without a path the built-in demo fleet is used.
    pub fn load(path: Option<&Path>) -> Result<Self, MonitorError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, MonitorError> {
        let Some(path) = path else {
            info!("No configuration file given, using demo fleet");
            return Ok(Self::default());
        };

        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: MonitorConfig = settings.try_deserialize()?;
        config.validate()?;

        info!(
            "Loaded {} sensors and {} notifiers from {}",
            config.sensors.len(),
            config.notifiers.len(),
            path.display()
        );
        Ok(config)
    }

    /// Check values that deserialization alone cannot rule out
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.evaluation_interval_ms == 0 {
            return Err(MonitorError::InvalidConfig(
                "evaluation_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Time between evaluation cycles
    pub fn evaluation_interval(&self) -> Duration {
        Duration::from_millis(self.evaluation_interval_ms)
    }
}
