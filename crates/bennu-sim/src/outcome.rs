//! Outcome resolver: classifies miss distances.

use bennu_core::constants::DANGER_FLOOR_KM;
use bennu_core::enums::{MissionOutcome, OutcomeBand};
use bennu_core::types::MissionConfig;

/// Display band for a miss distance.
pub fn classify(config: &MissionConfig, miss_km: f64) -> OutcomeBand {
    if miss_km >= config.safe_distance_km {
        OutcomeBand::Safe
    } else if miss_km >= 0.0 {
        OutcomeBand::Marginal
    } else if miss_km >= DANGER_FLOOR_KM {
        OutcomeBand::Dangerous
    } else {
        OutcomeBand::Catastrophic
    }
}

/// Binary outcome at clock expiry: success iff the miss distance reaches
/// the safe distance.
pub fn resolve(config: &MissionConfig, miss_km: f64) -> MissionOutcome {
    if miss_km >= config.safe_distance_km {
        MissionOutcome::Success
    } else {
        MissionOutcome::Failure
    }
}
