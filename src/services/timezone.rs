//! Named attendance zones and the clock abstraction behind "now".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::utils::datetime::{digital_clock, DigitalClock};

/// The two zones attendance records are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Philippine Time, `Asia/Manila`.
    Pht,
    /// Eastern Time, `America/New_York`.
    Est,
}

impl Zone {
    /// Resolves the zone against the IANA database.
    pub fn tz(self) -> Tz {
        match self {
            Zone::Pht => chrono_tz::Asia::Manila,
            Zone::Est => chrono_tz::America::New_York,
        }
    }

    /// Fixed short name of the zone; see [`Zone::label_at`] for the
    /// daylight-saving aware label.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Zone::Pht => "PHT",
            Zone::Est => "EST",
        }
    }

    /// Label in effect at `instant`: `EST` or `EDT` for Eastern time.
    ///
    /// Manila keeps `PHT`; the IANA database abbreviates it `PST`.
    pub fn label_at(self, instant: &DateTime<Utc>) -> String {
        match self {
            Zone::Pht => self.abbreviation().to_string(),
            Zone::Est => self.project(instant).format("%Z").to_string(),
        }
    }

    /// IANA identifier.
    pub fn iana_name(self) -> &'static str {
        match self {
            Zone::Pht => "Asia/Manila",
            Zone::Est => "America/New_York",
        }
    }

    /// Projects an absolute instant into this zone.
    pub fn project(self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Zone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pht" | "asia/manila" => Ok(Zone::Pht),
            "est" | "america/new_york" => Ok(Zone::Est),
            _ => Err(TimeError::InvalidFormat(s.to_string())),
        }
    }
}

/// An instant paired with the zone it should be read in.
///
/// The instant itself is never shifted; only its rendering depends on the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    instant: DateTime<Utc>,
    zone: Zone,
}

impl WallClock {
    /// Pairs `instant` with `zone`.
    pub fn new(instant: DateTime<Utc>, zone: Zone) -> Self {
        Self { instant, zone }
    }

    /// The underlying UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The zone used for rendering.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The instant as local time in the zone.
    pub fn local(&self) -> DateTime<Tz> {
        self.zone.project(&self.instant)
    }
}

impl fmt::Display for WallClock {
    // en-US locale rendering, e.g. "10/16/2026, 3:04:05 PM"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local().format("%-m/%-d/%Y, %-I:%M:%S %p"))
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reads the clock and renders "now" for a zone.
pub struct TimezoneService<C: Clock = SystemClock> {
    clock: C,
}

impl TimezoneService<SystemClock> {
    /// Service reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimezoneService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimezoneService<C> {
    /// Service reading an injected clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The current instant projected into `zone`.
    pub fn current_wall_clock(&self, zone: Zone) -> WallClock {
        WallClock::new(self.clock.now(), zone)
    }

    /// The digital clock face for the current instant in `zone`.
    pub fn digital_clock(&self, zone: Zone) -> DigitalClock {
        digital_clock(&self.clock.now(), zone)
    }
}
