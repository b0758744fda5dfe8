//! Sensor Watch - Main Entry Point
//!
//! Usage: `sensor-watch [CONFIG_FILE] < readings.txt`
//!
//! Each input line is `SENSOR_ID VALUE`. The alert history is printed to
//! stdout as JSON once the input ends.

use monitor::{init_logging, Fleet, MonitorConfig};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Sensor Watch v{} ===", env!("CARGO_PKG_VERSION"));

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = MonitorConfig::load(path.as_deref())?;
    let mut fleet = Fleet::from_config(&config)?;

    fleet
        .run(BufReader::new(tokio::io::stdin()), config.evaluation_interval())
        .await?;

    println!("{}", fleet.history_json()?);
    Ok(())
}
