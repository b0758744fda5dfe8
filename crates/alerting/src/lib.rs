//! Alerting System
//!
//! Evaluates every registered sensor once per cycle, records an alert for
//! each sensor in alert, and dispatches the alert message to every
//! registered notifier.

mod alert;
mod manager;
mod notifier;

pub use alert::{Alert, AlertLevel, NotificationKind};
pub use manager::{AlertManager, SharedSensor};
pub use notifier::{EmailNotifier, Notifier, NotifierConfig, SmsNotifier, WebhookNotifier};
