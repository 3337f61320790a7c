use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG`, or `default_directives` when unset
///
/// Load `.env` before calling this so a `RUST_LOG` set there is honoured.
pub fn log_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Logs a best-effort formatter falling back to its placeholder
pub fn log_format_fallback(operation: &str, input: &str, error: &str) {
    if input.trim().is_empty() {
        debug!("FORMAT_FALLBACK: {} on empty input", operation);
    } else {
        warn!("FORMAT_FALLBACK: {} on '{}' - {}", operation, input, error);
    }
}

/// Logs an unrecognised status tag rendered as on-time
pub fn log_status_fallback(tag: &str) {
    debug!("STATUS_FALLBACK: unknown tag '{}' rendered as on-time", tag);
}

/// Logs a rejected real-time update payload
pub fn log_update_rejected(error: &str, details: Option<&str>) {
    match details {
        Some(d) => warn!("UPDATE_REJECTED: {} - {}", error, d),
        None => warn!("UPDATE_REJECTED: {}", error),
    }
}

/// Logs clock ticks with consistent format
pub fn log_clock_tick(zone: &str, tick: u64, face: &str) {
    debug!("CLOCK_TICK: #{} in {} - {}", tick, zone, face);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
