use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::services::timezone::{Clock, TimezoneService, Zone};
use crate::utils::datetime::DigitalClock;
use crate::utils::logging::log_clock_tick;

/// Drives the live clock face: one [`DigitalClock`] per period.
pub struct ClockTicker<C: Clock> {
    service: TimezoneService<C>,
    zone: Zone,
    period: Duration,
}

impl<C: Clock> ClockTicker<C> {
    /// Creates a ticker; a zero period is rejected.
    pub fn new(clock: C, zone: Zone, period: Duration) -> anyhow::Result<Self> {
        if period.is_zero() {
            return Err(anyhow::anyhow!("Clock tick period must be greater than zero"));
        }

        Ok(Self {
            service: TimezoneService::with_clock(clock),
            zone,
            period,
        })
    }

    /// Renders `ticks` faces (or forever when `None`), calling `on_tick` for each.
    ///
    /// The first face is rendered immediately. Returns the number of ticks rendered.
    pub async fn run<F>(&self, ticks: Option<u64>, mut on_tick: F) -> u64
    where
        F: FnMut(DigitalClock),
    {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut rendered = 0u64;
        while ticks.map_or(true, |limit| rendered < limit) {
            timer.tick().await;
            let face = self.service.digital_clock(self.zone);
            rendered += 1;
            log_clock_tick(&face.zone, rendered, &face.time_24);
            on_tick(face);
        }

        rendered
    }
}
