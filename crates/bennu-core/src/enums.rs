//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Built-in impact scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationId {
    Ocean,
    Land,
}

impl LocationId {
    pub const ALL: [LocationId; 2] = [LocationId::Ocean, LocationId::Land];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::Ocean => "ocean",
            LocationId::Land => "land",
        }
    }
}

impl std::str::FromStr for LocationId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ocean" => Ok(LocationId::Ocean),
            "land" => Ok(LocationId::Land),
            other => Err(format!("unknown location '{other}'")),
        }
    }
}

/// Display band for a miss distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeBand {
    /// At or beyond the safe distance.
    Safe,
    /// Clears Earth, but inside the safe distance.
    Marginal,
    /// Collision course, within 1000 km of clearing.
    #[default]
    Dangerous,
    /// Collision course, more than 1000 km short.
    Catastrophic,
}

/// Binary result of a mission, fixed at the moment the clock expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionOutcome {
    Success,
    Failure,
}

/// Mission Clock state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockPhase {
    #[default]
    Idle,
    Running,
    Expired,
}

/// Mission lifecycle (top-level state).
///
/// ```text
/// Selecting -> Armed -> Running <-> Paused
///                       Running -> Exploding -> ResolvedFailure
///                       Running -> Settling  -> ResolvedSuccess
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// No location chosen yet.
    #[default]
    Selecting,
    /// Location chosen, force adjustable, not launched.
    Armed,
    /// Launched, clock ticking.
    Running,
    /// Launched, clock suspended by the user.
    Paused,
    /// Clock expired on an unsafe trajectory; explosion sequence playing.
    Exploding,
    /// Clock expired on a safe trajectory; waiting to show results.
    Settling,
    ResolvedSuccess,
    ResolvedFailure,
}

impl MissionPhase {
    /// Transition table for the mission lifecycle. `Selecting` is reachable
    /// from anywhere only through a reset, which replaces the state wholesale.
    pub fn can_transition_to(self, next: MissionPhase) -> bool {
        use MissionPhase::*;
        matches!(
            (self, next),
            (Selecting, Armed)
                | (Armed, Armed)
                | (Armed, Running)
                | (Running, Paused)
                | (Paused, Running)
                | (Running, Exploding)
                | (Running, Settling)
                | (Exploding, ResolvedFailure)
                | (Settling, ResolvedSuccess)
        )
    }

    pub fn is_launched(self) -> bool {
        !matches!(self, MissionPhase::Selecting | MissionPhase::Armed)
    }

    /// Launched and the countdown has not expired yet.
    pub fn is_counting_down(self) -> bool {
        matches!(self, MissionPhase::Running | MissionPhase::Paused)
    }

    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            MissionPhase::ResolvedSuccess | MissionPhase::ResolvedFailure
        )
    }
}
