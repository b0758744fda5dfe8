//! Notification channels

use crate::alert::NotificationKind;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A channel that delivers alert messages.
///
/// Delivery is fire-and-forget: transport failures belong to the
/// implementation and are never reported back to the alert manager.
pub trait Notifier: Send + Sync {
    /// Channel this notifier delivers through
    fn kind(&self) -> NotificationKind;

    /// Deliver one message
    fn send(&self, message: &str);
}

/// E-mail notifier
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    recipient: String,
}

impl EmailNotifier {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Notifier for EmailNotifier {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Email
    }

    fn send(&self, message: &str) {
        info!(target: "notify::email", "[EMAIL to {}] {}", self.recipient, message);
    }
}

/// Webhook notifier
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for WebhookNotifier {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Webhook
    }

    fn send(&self, message: &str) {
        info!(target: "notify::webhook", "[WEBHOOK {}] {}", self.url, message);
    }
}

/// SMS notifier
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    phone: String,
}

impl SmsNotifier {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl Notifier for SmsNotifier {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Sms
    }

    fn send(&self, message: &str) {
        info!(target: "notify::sms", "[SMS to {}] {}", self.phone, message);
    }
}

/// Declarative description of one notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifierConfig {
    Email { recipient: String },
    Webhook { url: String },
    Sms { phone: String },
}

impl NotifierConfig {
    /// Build the notifier described by this config
    pub fn build(&self) -> Arc<dyn Notifier> {
        match self {
            NotifierConfig::Email { recipient } => Arc::new(EmailNotifier::new(recipient.clone())),
            NotifierConfig::Webhook { url } => Arc::new(WebhookNotifier::new(url.clone())),
            NotifierConfig::Sms { phone } => Arc::new(SmsNotifier::new(phone.clone())),
        }
    }
}
