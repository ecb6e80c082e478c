//! Snapshot builder: flattens mission state plus derived values.

use bennu_core::events::MissionEvent;
use bennu_core::state::MissionSnapshot;
use bennu_core::types::MissionConfig;

use crate::mission::MissionState;
use crate::{outcome, trajectory};

pub fn build_snapshot(
    config: &MissionConfig,
    state: &MissionState,
    epoch: u64,
    events: Vec<MissionEvent>,
) -> MissionSnapshot {
    let launched = state.launched();
    let force = state.deflection_force();
    let time_remaining_years = state.time_remaining_years();

    let elapsed_years = if launched {
        trajectory::elapsed_years(config, time_remaining_years)
    } else {
        0.0
    };
    let progress = if config.total_years > 0.0 {
        (elapsed_years / config.total_years).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let current_miss_km = trajectory::current_miss(config, force, launched, time_remaining_years);
    let predicted_miss_km = trajectory::predicted_miss(config, force);

    MissionSnapshot {
        epoch,
        phase: state.phase(),
        location: state.location().cloned(),
        deflection_force: force,
        applied_force: if launched { force } else { 0.0 },
        launched,
        running: state.running(),
        resolved: state.resolved(),
        time_speed: state.time_speed(),
        time_remaining_years,
        elapsed_years,
        progress,
        current_miss_km,
        current_band: outcome::classify(config, current_miss_km),
        predicted_miss_km,
        predicted_band: outcome::classify(config, predicted_miss_km),
        explosion_frame: state.explosion_frame(),
        outcome: state.outcome(),
        events,
    }
}
