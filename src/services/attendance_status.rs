//! Attendance status tags and the display table behind the status chips.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::utils::logging::log_status_fallback;

/// Classification of a logged attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Logged in and out within schedule.
    #[default]
    OnTime,
    /// Logged in after the scheduled start.
    Late,
    /// Logged out before the scheduled end.
    EarlyOut,
    /// Total rendered hours below the required hours.
    Undertime,
    /// Total rendered hours above the required hours.
    Overtime,
    /// No time log for a scheduled day.
    NoLog,
    /// More than one in/out pair for the day.
    MultipleLogs,
    /// Entry added or corrected by hand.
    ManualEntry,
    /// Worked on a day covered by approved leave.
    LeavePresent,
    /// Worked on a holiday.
    HolidayWork,
}

/// How a status is shown: chip icon, label, color class and tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    /// The status this entry describes.
    pub status: AttendanceStatus,
    /// Icon class name.
    pub icon: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Color/severity class.
    pub color: &'static str,
    /// Explanatory tooltip.
    pub tooltip: &'static str,
}

static STATUS_TABLE: [StatusDisplay; 10] = [
    StatusDisplay {
        status: AttendanceStatus::OnTime,
        icon: "check-circle",
        label: "On Time",
        color: "success",
        tooltip: "Clocked in and out within the scheduled shift",
    },
    StatusDisplay {
        status: AttendanceStatus::Late,
        icon: "schedule",
        label: "Late",
        color: "error",
        tooltip: "Clocked in after the scheduled start time",
    },
    StatusDisplay {
        status: AttendanceStatus::EarlyOut,
        icon: "exit-to-app",
        label: "Early Out",
        color: "warning",
        tooltip: "Clocked out before the scheduled end time",
    },
    StatusDisplay {
        status: AttendanceStatus::Undertime,
        icon: "hourglass-bottom",
        label: "Undertime",
        color: "warning",
        tooltip: "Rendered fewer hours than the shift requires",
    },
    StatusDisplay {
        status: AttendanceStatus::Overtime,
        icon: "more-time",
        label: "Overtime",
        color: "info",
        tooltip: "Rendered more hours than the shift requires",
    },
    StatusDisplay {
        status: AttendanceStatus::NoLog,
        icon: "event-busy",
        label: "No Log",
        color: "error",
        tooltip: "No time log recorded for a scheduled work day",
    },
    StatusDisplay {
        status: AttendanceStatus::MultipleLogs,
        icon: "content-copy",
        label: "Multiple Logs",
        color: "secondary",
        tooltip: "More than one clock-in/clock-out pair recorded for the day",
    },
    StatusDisplay {
        status: AttendanceStatus::ManualEntry,
        icon: "edit-note",
        label: "Manual Entry",
        color: "default",
        tooltip: "Time log was entered or corrected manually",
    },
    StatusDisplay {
        status: AttendanceStatus::LeavePresent,
        icon: "beach-access",
        label: "Present on Leave",
        color: "info",
        tooltip: "Worked on a day covered by approved leave",
    },
    StatusDisplay {
        status: AttendanceStatus::HolidayWork,
        icon: "celebration",
        label: "Holiday Work",
        color: "primary",
        tooltip: "Worked on a company or regular holiday",
    },
];

impl AttendanceStatus {
    /// Every status in display order.
    pub const ALL: [AttendanceStatus; 10] = [
        AttendanceStatus::OnTime,
        AttendanceStatus::Late,
        AttendanceStatus::EarlyOut,
        AttendanceStatus::Undertime,
        AttendanceStatus::Overtime,
        AttendanceStatus::NoLog,
        AttendanceStatus::MultipleLogs,
        AttendanceStatus::ManualEntry,
        AttendanceStatus::LeavePresent,
        AttendanceStatus::HolidayWork,
    ];

    /// Wire tag, e.g. `early-out`.
    pub fn tag(self) -> &'static str {
        match self {
            AttendanceStatus::OnTime => "on-time",
            AttendanceStatus::Late => "late",
            AttendanceStatus::EarlyOut => "early-out",
            AttendanceStatus::Undertime => "undertime",
            AttendanceStatus::Overtime => "overtime",
            AttendanceStatus::NoLog => "no-log",
            AttendanceStatus::MultipleLogs => "multiple-logs",
            AttendanceStatus::ManualEntry => "manual-entry",
            AttendanceStatus::LeavePresent => "leave-present",
            AttendanceStatus::HolidayWork => "holiday-work",
        }
    }

    /// Display entry for this status.
    pub fn display(self) -> &'static StatusDisplay {
        // ALL and STATUS_TABLE share ordering
        &STATUS_TABLE[self as usize]
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AttendanceStatus {
    type Err = TimeError;

    /// Strict tag lookup; accepts `early-out`, `early_out` or `EARLY-OUT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.tag() == normalized)
            .ok_or_else(|| TimeError::UnknownStatus(s.to_string()))
    }
}

/// Looks up the display entry for a status tag.
///
/// Unknown tags render as on-time rather than failing.
pub fn classify_status(tag: &str) -> &'static StatusDisplay {
    match tag.parse::<AttendanceStatus>() {
        Ok(status) => status.display(),
        Err(_) => {
            log_status_fallback(tag);
            AttendanceStatus::default().display()
        }
    }
}
