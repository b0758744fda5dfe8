//! Sensor Models
//!
//! Provides calibrated sensors that keep a sliding window of recent readings,
//! expose the window average, and decide whether they are in alert according
//! to their kind (temperature, vibration or pressure).

mod config;
mod error;
mod kind;
mod sensor;
pub mod statistics;

pub use config::SensorConfig;
pub use error::SensorError;
pub use kind::{
    SensorKind, DEFAULT_HIGH_THRESHOLD, DEFAULT_MAX_PRESSURE, DEFAULT_MIN_PRESSURE,
    DEFAULT_RMS_THRESHOLD,
};
pub use sensor::{Sensor, DEFAULT_WINDOW_SIZE};
