//! Attendance updates pushed over the real-time channel.
//!
//! Payload timestamps go through the same parsing and zone projection as
//! REST data, so a live row renders identically to a refreshed one.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::attendance_status::classify_status;
use crate::services::timezone::Zone;
use crate::utils::datetime::{
    format_date_iso_in_zone, format_time_12h, format_time_hms_in_zone, parse_instant, work_hours,
    INVALID_DATE, TIME_PLACEHOLDER,
};
use crate::utils::logging::log_update_rejected;

/// A single attendance change event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    /// Employee the event belongs to.
    pub employee_id: String,
    /// Status tag, see [`crate::services::attendance_status::AttendanceStatus`].
    #[serde(default)]
    pub status: String,
    /// When the event happened, ISO-8601.
    pub timestamp: String,
    /// Clock-in time, `HH:MM[:SS]` or ISO-8601.
    #[serde(default)]
    pub time_in: Option<String>,
    /// Clock-out time, `HH:MM[:SS]` or ISO-8601.
    #[serde(default)]
    pub time_out: Option<String>,
    /// Unpaid break length in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

/// An update formatted for display in one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedUpdate {
    /// Employee the event belongs to.
    pub employee_id: String,
    /// `YYYY-MM-DD` of the event in the zone.
    pub date: String,
    /// `HH:MM:SS` of the event in the zone.
    pub time: String,
    /// Status label.
    pub status: &'static str,
    /// Status color class.
    pub status_color: &'static str,
    /// Clock-in as `h:mm AM/PM`.
    pub time_in: String,
    /// Clock-out as `h:mm AM/PM`.
    pub time_out: String,
    /// Work hours to two decimals, if both ends are known.
    pub hours: Option<String>,
}

impl AttendanceUpdate {
    /// Decodes a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| {
            log_update_rejected(&e.to_string(), None);
            e.into()
        })
    }

    /// Formats the update for display in `zone`.
    pub fn render(&self, zone: Zone) -> RenderedUpdate {
        let (date, time) = match parse_instant(&self.timestamp) {
            Ok(instant) => (
                format_date_iso_in_zone(&instant, zone),
                format_time_hms_in_zone(&instant, zone),
            ),
            Err(e) => {
                log_update_rejected(&e.to_string(), Some(&self.employee_id));
                (INVALID_DATE.to_string(), TIME_PLACEHOLDER.to_string())
            }
        };

        let display = classify_status(&self.status);
        let time_in = self.time_in.as_deref().unwrap_or_default();
        let time_out = self.time_out.as_deref().unwrap_or_default();
        let hours = (!time_in.is_empty() && !time_out.is_empty())
            .then(|| work_hours(time_in, time_out, self.break_minutes));

        RenderedUpdate {
            employee_id: self.employee_id.clone(),
            date,
            time,
            status: display.label,
            status_color: display.color,
            time_in: format_time_12h(time_in),
            time_out: format_time_12h(time_out),
            hours,
        }
    }
}
