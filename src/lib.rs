//! # Attendance Time
//! 
//! Zone-aware time formatting, time-of-day arithmetic and status
//! classification for attendance records.
//! 
//! ## Features
//! - Projection of attendance timestamps into Philippine and Eastern time
//! - Durations and work-hour totals between clock-in and clock-out
//! - 12-hour, ISO and long-form date rendering with placeholder fallbacks
//! - Status chip lookup for the ten attendance status tags
//! - Rendering of real-time attendance updates and a live clock ticker

/// Configuration for the clock binary
pub mod config;
/// Error type for the strict parsing entry points
pub mod error;
/// Zones, clocks, status classification and update rendering
pub mod services;
/// Utility functions for datetime formatting, validation and logging
pub mod utils;

pub use error::{Result, TimeError};
