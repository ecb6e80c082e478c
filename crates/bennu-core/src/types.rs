//! Fundamental mission types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::CommandRejected;

/// Geographic coordinates in degrees. North and East are positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoCoord {
    /// Formats as `33°N, 65°W`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{}°{}, {}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Trajectory constants, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// km per (cm/s × year).
    pub conversion_constant: f64,
    pub safe_distance_km: f64,
    /// Miss distance at zero elapsed time (negative: collision course).
    pub initial_miss_km: f64,
    pub total_years: f64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            conversion_constant: CONVERSION_CONSTANT,
            safe_distance_km: SAFE_DISTANCE_KM,
            initial_miss_km: INITIAL_MISS_KM,
            total_years: TOTAL_YEARS,
        }
    }
}

/// Real-time pacing of the clock and explosion sequence.
///
/// The stock values come from [`crate::constants`]; hosts and tests may
/// shorten the periods without changing any simulated quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionTiming {
    pub clock_tick_period: Duration,
    /// Simulated years consumed per clock tick at 1x.
    pub base_decrement_years: f64,
    pub explosion_frames: u32,
    pub explosion_frame_period: Duration,
    pub explosion_settle_delay: Duration,
    pub success_settle_delay: Duration,
}

impl Default for MissionTiming {
    fn default() -> Self {
        Self {
            clock_tick_period: CLOCK_TICK_PERIOD,
            base_decrement_years: BASE_DECREMENT_YEARS,
            explosion_frames: EXPLOSION_FRAMES,
            explosion_frame_period: EXPLOSION_FRAME_PERIOD,
            explosion_settle_delay: EXPLOSION_SETTLE_DELAY,
            success_settle_delay: SUCCESS_SETTLE_DELAY,
        }
    }
}

impl MissionTiming {
    /// Same pacing with every real-time period divided by `factor`.
    pub fn accelerated(factor: u32) -> Self {
        let factor = factor.max(1);
        let stock = Self::default();
        Self {
            clock_tick_period: stock.clock_tick_period / factor,
            explosion_frame_period: stock.explosion_frame_period / factor,
            explosion_settle_delay: stock.explosion_settle_delay / factor,
            success_settle_delay: stock.success_settle_delay / factor,
            ..stock
        }
    }
}

/// Time speed multiplier. Only the values in [`SPEED_MULTIPLIERS`] exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeSpeed {
    #[default]
    X1,
    X2,
    X5,
    X10,
}

impl TimeSpeed {
    pub fn multiplier(self) -> u32 {
        match self {
            TimeSpeed::X1 => 1,
            TimeSpeed::X2 => 2,
            TimeSpeed::X5 => 5,
            TimeSpeed::X10 => 10,
        }
    }
}

impl TryFrom<u32> for TimeSpeed {
    type Error = CommandRejected;

    fn try_from(multiplier: u32) -> Result<Self, Self::Error> {
        match multiplier {
            1 => Ok(TimeSpeed::X1),
            2 => Ok(TimeSpeed::X2),
            5 => Ok(TimeSpeed::X5),
            10 => Ok(TimeSpeed::X10),
            _ => Err(CommandRejected::UnsupportedSpeed { multiplier }),
        }
    }
}

impl From<TimeSpeed> for u32 {
    fn from(speed: TimeSpeed) -> Self {
        speed.multiplier()
    }
}

impl fmt::Display for TimeSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}
