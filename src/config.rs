use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

use crate::services::timezone::Zone;

/// Settings for the `attendance-clock` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone the clock face is rendered in.
    pub zone: Zone,
    /// Time between faces.
    pub tick_period: Duration,
    /// Stop after this many faces; `None` runs until interrupted.
    pub max_ticks: Option<u64>,
}

impl Config {
    /// Reads `CLOCK_ZONE`, `CLOCK_TICK_MILLIS` and `CLOCK_TICKS`.
    pub fn from_env() -> Result<Self> {
        let zone_str = env::var("CLOCK_ZONE").unwrap_or_else(|_| "PHT".to_string());
        let zone = if zone_str.trim().is_empty() {
            Zone::Pht
        } else {
            zone_str
                .parse::<Zone>()
                .map_err(|_| anyhow!("Invalid CLOCK_ZONE"))?
        };

        let millis_str = env::var("CLOCK_TICK_MILLIS")
            .unwrap_or_else(|_| "1000".to_string());
        let millis: u64 = millis_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid CLOCK_TICK_MILLIS"))?;
        if millis == 0 {
            return Err(anyhow!("Invalid CLOCK_TICK_MILLIS"));
        }

        let max_ticks = match env::var("CLOCK_TICKS") {
            Ok(ticks) if !ticks.trim().is_empty() => {
                let ticks: u64 = ticks.trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid CLOCK_TICKS"))?;
                (ticks > 0).then_some(ticks)
            }
            _ => None,
        };

        Ok(Config {
            zone,
            tick_period: Duration::from_millis(millis),
            max_ticks,
        })
    }
}
