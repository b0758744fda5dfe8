//! Sensor fleet: config wiring, reading ingestion, and the monitor loop

use crate::error::MonitorError;
use crate::settings::MonitorConfig;
use alerting::{Alert, AlertManager, SharedSensor};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Sensors addressable by id plus the alert manager evaluating them
pub struct Fleet {
    sensors: HashMap<String, SharedSensor>,
    manager: AlertManager,
}

impl Fleet {
    /// Build sensors and notifiers from configuration
    pub fn from_config(config: &MonitorConfig) -> Result<Self, MonitorError> {
        let mut sensors = HashMap::with_capacity(config.sensors.len());
        let mut ordered = Vec::with_capacity(config.sensors.len());

        for sensor_config in &config.sensors {
            if sensors.contains_key(&sensor_config.id) {
                return Err(MonitorError::DuplicateSensor(sensor_config.id.clone()));
            }
            let shared: SharedSensor = Arc::new(RwLock::new(sensor_config.build()?));
            sensors.insert(sensor_config.id.clone(), shared.clone());
            ordered.push(shared);
        }

        let notifiers = config.notifiers.iter().map(|n| n.build()).collect();

        Ok(Self {
            sensors,
            manager: AlertManager::new(ordered, notifiers),
        })
    }

    /// Feed one raw reading to a sensor
    pub fn ingest(&self, sensor_id: &str, raw: f64) -> Result<(), MonitorError> {
        let sensor = self
            .sensors
            .get(sensor_id)
            .ok_or_else(|| MonitorError::UnknownSensor(sensor_id.to_string()))?;
        sensor.write().ingest(raw);
        Ok(())
    }

    /// Run one evaluation cycle, returning how many alerts it raised
    pub fn evaluate(&mut self) -> usize {
        let before = self.manager.history().len();
        self.manager.evaluate_and_notify();
        let raised = self.manager.history().len() - before;
        debug!("Evaluation cycle raised {} alerts", raised);
        raised
    }

    /// Alerts raised so far, oldest first
    pub fn history(&self) -> &[Alert] {
        self.manager.history()
    }

    /// Alert history as pretty-printed JSON
    pub fn history_json(&self) -> Result<String, MonitorError> {
        Ok(serde_json::to_string_pretty(self.history())?)
    }

    /// Current average of a sensor
    pub fn average(&self, sensor_id: &str) -> Option<f64> {
        self.sensors.get(sensor_id).map(|s| s.read().average())
    }

    /// Number of sensors in the fleet
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Apply one input line; blank lines and `#` comments are ignored
    pub fn apply_line(&self, line: &str) -> Result<(), MonitorError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }
        let (sensor_id, raw) = parse_reading(trimmed)?;
        self.ingest(sensor_id, raw)
    }

    /// Ingest readings from `reader` until EOF, evaluating every `interval`.
    ///
    /// A final cycle runs once the input is exhausted. Malformed lines and
    /// unknown sensor ids are logged and skipped.
    pub async fn run<R>(&mut self, reader: R, interval: Duration) -> Result<(), MonitorError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;

        info!(
            "Monitoring {} sensors, evaluating every {:?}",
            self.len(),
            interval
        );

        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => {
                        if let Err(e) = self.apply_line(&line) {
                            warn!("Skipping input: {}", e);
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => {
                    self.evaluate();
                }
            }
        }

        let raised = self.evaluate();
        info!(
            "Input exhausted; final cycle raised {} alerts ({} total)",
            raised,
            self.history().len()
        );
        Ok(())
    }
}

/// Parse a `SENSOR_ID VALUE` line
pub fn parse_reading(line: &str) -> Result<(&str, f64), MonitorError> {
    let malformed = |reason: &str| MonitorError::Parse {
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = line.split_whitespace();
    let sensor_id = parts.next().ok_or_else(|| malformed("missing sensor id"))?;
    let value = parts.next().ok_or_else(|| malformed("missing value"))?;
    if parts.next().is_some() {
        return Err(malformed("trailing fields"));
    }

    let raw = value
        .parse::<f64>()
        .map_err(|e| malformed(&e.to_string()))?;
    Ok((sensor_id, raw))
}
