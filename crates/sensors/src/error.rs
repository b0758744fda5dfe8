//! Sensor Error Types

use crate::kind::SensorKind;
use thiserror::Error;

/// Errors raised while constructing a sensor
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorError {
    /// Window must hold at least one reading
    #[error("Sensor {0}: window size must be greater than zero")]
    ZeroWindow(String),

    /// Thresholds must be finite numbers
    #[error("Sensor {id}: non-finite threshold in {kind:?}")]
    NonFiniteThreshold { id: String, kind: SensorKind },

    /// Pressure band with min above max
    #[error("Sensor {id}: pressure band [{min}, {max}] is empty")]
    InvalidBand { id: String, min: f64, max: f64 },
}
