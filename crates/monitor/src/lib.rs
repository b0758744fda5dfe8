//! Sensor Fleet Monitor
//!
//! Wires configured sensors and notifiers into an alert manager, feeds it
//! readings from a line-oriented input, and runs evaluation cycles on a
//! fixed interval.

mod error;
mod fleet;
mod settings;

pub use error::MonitorError;
pub use fleet::{parse_reading, Fleet};
pub use settings::{MonitorConfig, ENV_PREFIX};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging to stderr
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
