//! Monitor Error Types

use sensors::SensorError;
use thiserror::Error;

/// Errors raised while configuring or running the monitor
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error("Duplicate sensor id: {0}")]
    DuplicateSensor(String),

    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("Malformed reading {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
