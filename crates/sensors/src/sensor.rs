//! Calibrated Sliding-Window Sensor

use crate::error::SensorError;
use crate::kind::{
    SensorKind, DEFAULT_HIGH_THRESHOLD, DEFAULT_MAX_PRESSURE, DEFAULT_MIN_PRESSURE,
    DEFAULT_RMS_THRESHOLD,
};
use crate::statistics;
use ring_buffer::RingBuffer;
use tracing::{debug, warn};

/// Default number of readings kept in the window
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// A physical sensor keeping its most recent calibrated readings
#[derive(Debug, Clone)]
pub struct Sensor {
    /// Identifier, unique within a fleet
    id: String,
    /// Added to every raw reading before it is stored
    calibration_offset: f64,
    /// Calibrated readings, oldest first
    window: RingBuffer<f64>,
    /// Kind and thresholds
    kind: SensorKind,
}

impl Sensor {
    /// Create a new sensor
    pub fn new(
        id: impl Into<String>,
        window_size: usize,
        calibration_offset: f64,
        kind: SensorKind,
    ) -> Result<Self, SensorError> {
        let id = id.into();

        if !kind.has_finite_thresholds() {
            return Err(SensorError::NonFiniteThreshold { id, kind });
        }

        if let SensorKind::Pressure {
            min_threshold,
            max_threshold,
        } = kind
        {
            if min_threshold > max_threshold {
                return Err(SensorError::InvalidBand {
                    id,
                    min: min_threshold,
                    max: max_threshold,
                });
            }
        }

        let window =
            RingBuffer::new(window_size).map_err(|_| SensorError::ZeroWindow(id.clone()))?;

        debug!(
            "Creating {} sensor {} (window={}, calibration={})",
            kind.label(),
            id,
            window_size,
            calibration_offset
        );

        Ok(Self {
            id,
            calibration_offset,
            window,
            kind,
        })
    }

    /// Temperature sensor with the default window and threshold
    pub fn temperature(id: impl Into<String>) -> Self {
        Self::with_defaults(
            id,
            SensorKind::Temperature {
                high_threshold: DEFAULT_HIGH_THRESHOLD,
            },
        )
    }

    /// Vibration sensor with the default window and threshold
    pub fn vibration(id: impl Into<String>) -> Self {
        Self::with_defaults(
            id,
            SensorKind::Vibration {
                rms_threshold: DEFAULT_RMS_THRESHOLD,
            },
        )
    }

    /// Pressure sensor with the default window and band
    pub fn pressure(id: impl Into<String>) -> Self {
        Self::with_defaults(
            id,
            SensorKind::Pressure {
                min_threshold: DEFAULT_MIN_PRESSURE,
                max_threshold: DEFAULT_MAX_PRESSURE,
            },
        )
    }

    fn with_defaults(id: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            id: id.into(),
            calibration_offset: 0.0,
            window: RingBuffer::with_default_capacity(),
            kind,
        }
    }

    /// Replace the window with an empty one of the given size
    pub fn with_window(mut self, window_size: usize) -> Result<Self, SensorError> {
        self.window = RingBuffer::new(window_size)
            .map_err(|_| SensorError::ZeroWindow(self.id.clone()))?;
        Ok(self)
    }

    /// Set the calibration offset and empty the window, so every stored
    /// reading carries the same offset
    pub fn with_calibration(mut self, calibration_offset: f64) -> Self {
        self.calibration_offset = calibration_offset;
        self.window.clear();
        self
    }

    /// Ingest a raw reading: calibrate it and push it into the window
    pub fn ingest(&mut self, raw: f64) {
        let calibrated = raw + self.calibration_offset;
        if !calibrated.is_finite() {
            warn!("Sensor {}: non-finite reading {} stored", self.id, calibrated);
        }

        if let Some(evicted) = self.window.push(calibrated) {
            debug!("Sensor {}: evicted {} from window", self.id, evicted);
        }
    }

    /// Mean of the current window, 0.0 when empty
    pub fn average(&self) -> f64 {
        statistics::mean(self.window.iter())
    }

    /// Whether the current average breaches this sensor's thresholds
    pub fn is_in_alert(&self) -> bool {
        self.kind.is_breached(self.average())
    }

    /// Root mean square of the current window, 0.0 when empty.
    ///
    /// Auxiliary metric only: vibration alerts compare the magnitude of the
    /// signed average, so an oscillating signal can have a large RMS and still
    /// not be in alert.
    pub fn rms(&self) -> f64 {
        statistics::rms(self.window.iter())
    }

    /// Calibrated readings currently in the window, oldest first
    pub fn readings(&self) -> Vec<f64> {
        self.window.to_vec()
    }

    /// Sensor identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sensor kind and thresholds
    pub fn kind(&self) -> &SensorKind {
        &self.kind
    }

    /// Window capacity
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Calibration offset
    pub fn calibration_offset(&self) -> f64 {
        self.calibration_offset
    }

    /// Number of readings ingested since creation
    pub fn total_readings(&self) -> usize {
        self.window.total_written()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_average_is_zero() {
        let sensor = Sensor::temperature("T1");
        assert_eq!(sensor.average(), 0.0);
        assert_eq!(sensor.rms(), 0.0);
        assert!(sensor.readings().is_empty());
    }

    #[test]
    fn test_defaults() {
        let sensor = Sensor::pressure("P1");
        assert_eq!(sensor.window_size(), DEFAULT_WINDOW_SIZE);
        assert_eq!(sensor.calibration_offset(), 0.0);
        assert_eq!(
            *sensor.kind(),
            SensorKind::Pressure {
                min_threshold: 1.0,
                max_threshold: 100.0
            }
        );
        // Empty window averages to 0.0, which is below the band
        assert!(sensor.is_in_alert());
    }

    #[test]
    fn test_calibration_before_window() {
        let mut sensor = Sensor::temperature("T1")
            .with_window(1)
            .unwrap()
            .with_calibration(5.0);
        sensor.ingest(10.0);
        assert_eq!(sensor.average(), 15.0);
    }

    #[test]
    fn test_calibration_discards_earlier_readings() {
        let mut sensor = Sensor::temperature("T1");
        sensor.ingest(70.0);
        sensor.ingest(72.0);

        let mut sensor = sensor.with_calibration(2.0);
        assert!(sensor.readings().is_empty());

        sensor.ingest(70.0);
        assert_eq!(sensor.readings(), vec![72.0]);
        assert_eq!(sensor.calibration_offset(), 2.0);
    }

    #[test]
    fn test_threshold_boundary_on_constant_window() {
        let mut temperature = Sensor::new(
            "T1",
            3,
            0.0,
            SensorKind::Temperature { high_threshold: 2.8 },
        )
        .unwrap();
        for _ in 0..3 {
            temperature.ingest(2.8);
        }
        assert_eq!(temperature.average(), 2.8);
        assert!(temperature.is_in_alert());

        let mut pressure = Sensor::new(
            "P1",
            3,
            0.0,
            SensorKind::Pressure {
                min_threshold: 0.7,
                max_threshold: 5.0,
            },
        )
        .unwrap();
        for _ in 0..3 {
            pressure.ingest(0.7);
        }
        assert_eq!(pressure.average(), 0.7);
        assert!(!pressure.is_in_alert());

        for _ in 0..3 {
            pressure.ingest(5.0);
        }
        assert!(!pressure.is_in_alert());
    }

    #[test]
    fn test_calibrated_constant_window_hits_threshold() {
        let mut sensor = Sensor::new(
            "T1",
            5,
            0.1,
            SensorKind::Temperature {
                high_threshold: 80.1,
            },
        )
        .unwrap();
        for _ in 0..5 {
            sensor.ingest(80.0);
        }
        assert_eq!(sensor.average(), 80.0 + 0.1);
        assert_eq!(sensor.is_in_alert(), 80.0 + 0.1 >= 80.1);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut sensor = Sensor::new(
            "T1",
            3,
            1.0,
            SensorKind::Temperature {
                high_threshold: 80.0,
            },
        )
        .unwrap();
        for raw in [10.0, 20.0, 30.0, 40.0] {
            sensor.ingest(raw);
        }
        assert_eq!(sensor.readings(), vec![21.0, 31.0, 41.0]);
        assert!((sensor.average() - 31.0).abs() < 1e-12);
        assert_eq!(sensor.total_readings(), 4);
    }

    #[test]
    fn test_temperature_alert() {
        let mut sensor = Sensor::new(
            "T1",
            3,
            0.0,
            SensorKind::Temperature {
                high_threshold: 80.0,
            },
        )
        .unwrap();
        for _ in 0..3 {
            sensor.ingest(85.0);
        }
        assert!(sensor.is_in_alert());

        for _ in 0..3 {
            sensor.ingest(79.0);
        }
        assert!(!sensor.is_in_alert());

        for _ in 0..3 {
            sensor.ingest(80.0);
        }
        assert!(sensor.is_in_alert());
    }

    #[test]
    fn test_vibration_average_and_rms_disagree() {
        let mut steady = Sensor::new("V1", 3, 0.0, SensorKind::Vibration { rms_threshold: 4.0 })
            .unwrap();
        for _ in 0..3 {
            steady.ingest(-5.0);
        }
        assert!((steady.average() + 5.0).abs() < 1e-12);
        assert!((steady.rms() - 5.0).abs() < 1e-12);
        assert!(steady.is_in_alert());

        let mut oscillating =
            Sensor::new("V2", 4, 0.0, SensorKind::Vibration { rms_threshold: 2.5 }).unwrap();
        for raw in [3.0, -3.0, 3.0, -3.0] {
            oscillating.ingest(raw);
        }
        assert!(oscillating.average().abs() < 1e-12);
        assert!(oscillating.rms() > 2.5);
        assert!(!oscillating.is_in_alert());
    }

    #[test]
    fn test_pressure_out_of_band() {
        let mut sensor = Sensor::pressure("P1").with_window(2).unwrap();
        sensor.ingest(50.0);
        sensor.ingest(50.0);
        assert!(!sensor.is_in_alert());

        sensor.ingest(150.0);
        sensor.ingest(150.0);
        assert!(sensor.is_in_alert());

        sensor.ingest(0.5);
        sensor.ingest(0.5);
        assert!(sensor.is_in_alert());

        sensor.ingest(100.0);
        sensor.ingest(100.0);
        assert!(!sensor.is_in_alert());
    }

    #[test]
    fn test_non_finite_reading_is_stored() {
        let mut sensor = Sensor::temperature("T1");
        sensor.ingest(f64::NAN);
        assert!(sensor.average().is_nan());
        assert!(!sensor.is_in_alert());
    }

    #[test]
    fn test_zero_window_rejected() {
        let kind = SensorKind::Temperature {
            high_threshold: 80.0,
        };
        assert_eq!(
            Sensor::new("T1", 0, 0.0, kind).unwrap_err(),
            SensorError::ZeroWindow("T1".to_string())
        );
        assert!(Sensor::vibration("V1").with_window(0).is_err());
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        let kinds = [
            SensorKind::Temperature {
                high_threshold: f64::NAN,
            },
            SensorKind::Vibration {
                rms_threshold: f64::INFINITY,
            },
            SensorKind::Pressure {
                min_threshold: f64::NAN,
                max_threshold: 100.0,
            },
            SensorKind::Pressure {
                min_threshold: 1.0,
                max_threshold: f64::NAN,
            },
        ];

        for kind in kinds {
            assert!(matches!(
                Sensor::new("S1", 5, 0.0, kind),
                Err(SensorError::NonFiniteThreshold { .. })
            ));
        }
    }

    #[test]
    fn test_inverted_band_rejected() {
        let kind = SensorKind::Pressure {
            min_threshold: 10.0,
            max_threshold: 5.0,
        };
        assert!(matches!(
            Sensor::new("P1", 5, 0.0, kind),
            Err(SensorError::InvalidBand { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_window_holds_last_calibrated(
            window in 1usize..10,
            offset in -10.0f64..10.0,
            raws in proptest::collection::vec(-500.0f64..500.0, 0..40),
        ) {
            let mut sensor = Sensor::new(
                "S",
                window,
                offset,
                SensorKind::Temperature { high_threshold: 80.0 },
            ).unwrap();
            for &raw in &raws {
                sensor.ingest(raw);
            }

            let kept = raws.len().min(window);
            let expected: Vec<f64> = raws[raws.len() - kept..]
                .iter()
                .map(|raw| raw + offset)
                .collect();
            prop_assert_eq!(sensor.readings(), expected);
        }
    }
}
