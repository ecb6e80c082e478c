//! Mission snapshot: the read-only view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::constants::WORLD_POPULATION;
use crate::enums::*;
use crate::events::MissionEvent;
use crate::locations::LocationProfile;
use crate::types::TimeSpeed;

/// Complete mission state plus derived values, produced after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionSnapshot {
    /// Incremented by every reset. Snapshots from an older epoch are stale.
    pub epoch: u64,
    pub phase: MissionPhase,
    pub location: Option<LocationProfile>,
    /// Selected deflection force (cm/s).
    pub deflection_force: f64,
    /// Force actually applied: zero until launch.
    pub applied_force: f64,
    pub launched: bool,
    /// Clock actively ticking.
    pub running: bool,
    pub resolved: bool,
    pub time_speed: TimeSpeed,
    pub time_remaining_years: f64,
    pub elapsed_years: f64,
    /// Elapsed fraction of the countdown in [0, 1].
    pub progress: f64,
    /// Miss distance for the time elapsed so far (km).
    pub current_miss_km: f64,
    pub current_band: OutcomeBand,
    /// Miss distance if the selected force runs the full countdown (km).
    pub predicted_miss_km: f64,
    pub predicted_band: OutcomeBand,
    /// 0 when inactive, otherwise 1..=terminal frame.
    pub explosion_frame: u32,
    /// Fixed once the clock expires.
    pub outcome: Option<MissionOutcome>,
    /// Events produced since the previous snapshot.
    pub events: Vec<MissionEvent>,
}

/// Results summary shown once a mission has resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub location_name: String,
    /// Formatted as `40°N, 100°W`.
    pub coordinates: String,
    pub outcome: MissionOutcome,
    pub deflection_force: f64,
    pub final_miss_km: f64,
    pub final_band: OutcomeBand,
    pub warning_time_used_years: f64,
    /// People protected from impact; zero on failure.
    pub population_protected: u64,
}

impl MissionReport {
    /// Builds the report from a resolved snapshot. `None` until resolved.
    pub fn from_snapshot(snapshot: &MissionSnapshot) -> Option<Self> {
        if !snapshot.resolved {
            return None;
        }
        let location = snapshot.location.as_ref()?;
        let outcome = snapshot.outcome?;

        Some(Self {
            location_name: location.name.clone(),
            coordinates: location.coords.to_string(),
            outcome,
            deflection_force: snapshot.deflection_force,
            final_miss_km: snapshot.current_miss_km,
            final_band: snapshot.current_band,
            warning_time_used_years: snapshot.elapsed_years,
            population_protected: match outcome {
                MissionOutcome::Success => WORLD_POPULATION,
                MissionOutcome::Failure => 0,
            },
        })
    }
}
