//! # Attendance Clock Entry Point
//!
//! Renders the dashboard's live digital clock in the configured zone.
//! It initializes logging, loads configuration, and ticks until the
//! configured tick count is reached or Ctrl-C is pressed.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_time::config::Config;
use attendance_time::services::{ClockTicker, SystemClock};
use attendance_time::utils::logging::{log_filter, log_system_event};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG from it reaches the filter
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(log_filter("attendance_time=info,attendance_clock=info"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    info!("Starting attendance clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Zone: {} ({}), Tick: {}ms, Ticks: {}",
        config.zone, config.zone.iana_name(), config.tick_period.as_millis(),
        config.max_ticks.map_or_else(|| "unlimited".to_string(), |t| t.to_string()));

    let ticker = ClockTicker::new(SystemClock, config.zone, config.tick_period)?;

    tokio::select! {
        rendered = ticker.run(config.max_ticks, |face| {
            println!("{} {}  {}", face.time_12, face.zone, face.date_long);
        }) => {
            log_system_event("Tick limit reached", Some(&format!("{} faces rendered", rendered)));
        }
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
            }
            log_system_event("Interrupted", None);
        }
    }

    info!("Application stopped");
    Ok(())
}
