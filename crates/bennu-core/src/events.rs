//! Events emitted by the mission for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{LocationId, MissionOutcome};
use crate::error::CommandRejected;
use crate::types::TimeSpeed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionEvent {
    LocationSelected { location: LocationId },
    Launched { force: f64 },
    Paused { time_remaining_years: f64 },
    Resumed { time_remaining_years: f64 },
    SpeedChanged { speed: TimeSpeed },
    /// One countdown decrement applied.
    ClockTick { time_remaining_years: f64 },
    /// Countdown reached zero; the outcome is now fixed.
    ClockExpired {
        miss_distance_km: f64,
        outcome: MissionOutcome,
    },
    ExplosionFrame { frame: u32 },
    Resolved { outcome: MissionOutcome },
    /// Mission discarded; `epoch` is the new mission's epoch.
    Reset { epoch: u64 },
    CommandRejected { reason: CommandRejected },
}
