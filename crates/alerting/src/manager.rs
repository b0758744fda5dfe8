//! Alert Manager Implementation

use crate::alert::{Alert, AlertLevel};
use crate::notifier::Notifier;
use chrono::Utc;
use parking_lot::RwLock;
use sensors::Sensor;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sensor handle shared between the alert manager and whoever feeds readings
pub type SharedSensor = Arc<RwLock<Sensor>>;

/// Owns the evaluation cycle and the alert history
pub struct AlertManager {
    /// Sensors in registration order
    sensors: Vec<SharedSensor>,
    /// Notifiers in registration order
    notifiers: Vec<Arc<dyn Notifier>>,
    /// Every alert raised so far, oldest first
    history: Vec<Alert>,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(sensors: Vec<SharedSensor>, notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        info!(
            "Creating alert manager with {} sensors and {} notifiers",
            sensors.len(),
            notifiers.len()
        );
        Self {
            sensors,
            notifiers,
            history: Vec::new(),
        }
    }

    /// Register a sensor after the ones already present
    pub fn add_sensor(&mut self, sensor: SharedSensor) {
        self.sensors.push(sensor);
    }

    /// Register a notifier after the ones already present
    pub fn add_notifier(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Run one evaluation cycle.
    ///
    /// Every sensor in alert yields a new critical [`Alert`] in the history and
    /// one `send` per registered notifier, in registration order. Sensors that
    /// stay in alert are reported again on every cycle.
    pub fn evaluate_and_notify(&mut self) {
        for shared in &self.sensors {
            let (id, average) = {
                let sensor = shared.read();
                if !sensor.is_in_alert() {
                    continue;
                }
                (sensor.id().to_string(), sensor.average())
            };

            let message = format!("ALERTA: Sensor {} en umbral (avg={:.2})", id, average);
            warn!("Sensor {} in alert (avg={:.2})", id, average);

            self.history.push(Alert::new(
                id.as_str(),
                message.as_str(),
                Utc::now(),
                AlertLevel::Critical,
            ));

            for notifier in &self.notifiers {
                debug!("Dispatching alert for {} via {:?}", id, notifier.kind());
                notifier.send(&message);
            }
        }
    }

    /// All alerts raised so far, oldest first
    pub fn history(&self) -> &[Alert] {
        &self.history
    }

    /// Alerts raised by one sensor, oldest first
    pub fn alerts_for<'a>(&'a self, sensor_id: &'a str) -> impl Iterator<Item = &'a Alert> + 'a {
        self.history
            .iter()
            .filter(move |alert| alert.sensor_id() == sensor_id)
    }

    /// Number of registered sensors
    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Number of registered notifiers
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
