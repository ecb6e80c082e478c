//! User actions sent from the presentation layer to the mission.

use serde::{Deserialize, Serialize};

use crate::enums::LocationId;

/// The six mission actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionCommand {
    /// Choose the impact scenario. Pre-launch only.
    SelectLocation { location: LocationId },
    /// Set the deflection force in cm/s. Pre-launch only.
    SetDeflectionForce { force: f64 },
    /// Launch the kinetic impactor and start the countdown.
    Launch,
    /// Pause or resume the countdown.
    TogglePause,
    /// Set the time speed multiplier (1, 2, 5 or 10).
    SetTimeSpeed { multiplier: u32 },
    /// Discard the mission and return to location selection.
    Reset,
}
