//! Mission state: the single mutable document owned by the controller.

use bennu_core::constants::FORCE_DEFAULT;
use bennu_core::enums::{MissionOutcome, MissionPhase};
use bennu_core::locations::LocationProfile;
use bennu_core::types::{MissionConfig, MissionTiming, TimeSpeed};

use crate::clock::MissionClock;
use crate::explosion::ExplosionSequencer;
use crate::timer::Timer;

/// Everything that changes during one mission. Replaced wholesale on reset,
/// which also drops every timer it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionState {
    pub(crate) phase: MissionPhase,
    pub(crate) location: Option<LocationProfile>,
    pub(crate) deflection_force: f64,
    pub(crate) time_speed: TimeSpeed,
    pub(crate) clock: MissionClock,
    pub(crate) sequencer: ExplosionSequencer,
    /// Armed only in `Settling`.
    pub(crate) settle_timer: Option<Timer>,
    /// Fixed when the clock expires.
    pub(crate) outcome: Option<MissionOutcome>,
}

impl MissionState {
    pub fn new(config: &MissionConfig, timing: &MissionTiming) -> Self {
        Self {
            phase: MissionPhase::Selecting,
            location: None,
            deflection_force: FORCE_DEFAULT,
            time_speed: TimeSpeed::default(),
            clock: MissionClock::with_params(
                config.total_years,
                timing.base_decrement_years,
                timing.clock_tick_period,
            ),
            sequencer: ExplosionSequencer::with_params(
                timing.explosion_frames,
                timing.explosion_frame_period,
                timing.explosion_settle_delay,
            ),
            settle_timer: None,
            outcome: None,
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn location(&self) -> Option<&LocationProfile> {
        self.location.as_ref()
    }

    pub fn deflection_force(&self) -> f64 {
        self.deflection_force
    }

    pub fn time_speed(&self) -> TimeSpeed {
        self.time_speed
    }

    pub fn time_remaining_years(&self) -> f64 {
        self.clock.time_remaining_years()
    }

    pub fn explosion_frame(&self) -> u32 {
        self.sequencer.frame()
    }

    pub fn launched(&self) -> bool {
        self.phase.is_launched()
    }

    pub fn running(&self) -> bool {
        self.phase == MissionPhase::Running
    }

    pub fn resolved(&self) -> bool {
        self.phase.is_resolved()
    }

    pub fn outcome(&self) -> Option<MissionOutcome> {
        self.outcome
    }

    pub fn clock(&self) -> &MissionClock {
        &self.clock
    }

    pub fn sequencer(&self) -> &ExplosionSequencer {
        &self.sequencer
    }

    /// Whether any timer in this mission could still fire.
    pub fn has_armed_timers(&self) -> bool {
        self.clock.is_armed() || self.sequencer.is_armed() || self.settle_timer.is_some()
    }
}
