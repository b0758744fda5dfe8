//! Alert records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

/// Delivery channel of a notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    Email,
    Webhook,
    Sms,
}

/// One detected alert event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    sensor_id: String,
    message: String,
    timestamp: DateTime<Utc>,
    level: AlertLevel,
}

impl Alert {
    /// Create a new alert
    pub fn new(
        sensor_id: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        level: AlertLevel,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            message: message.into(),
            timestamp,
            level,
        }
    }

    /// Id of the sensor that raised the alert
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }

    pub fn is_critical(&self) -> bool {
        self.level == AlertLevel::Critical
    }
}
