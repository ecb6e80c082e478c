//! Mission controller: owns the mission state and its action surface.
//!
//! All mutation goes through here: the six user actions and `advance`,
//! which feeds real time to whichever timer the current phase owns. At most
//! one timer is live at any instant (clock, explosion or settle), so the
//! clock and the explosion sequence can never contend for state.

use std::time::Duration;

use tracing::{debug, info, trace};

use bennu_core::constants::{FORCE_MAX, FORCE_MIN};
use bennu_core::enums::{MissionOutcome, MissionPhase};
use bennu_core::error::CommandRejected;
use bennu_core::events::MissionEvent;
use bennu_core::locations::LocationProfile;
use bennu_core::state::{MissionReport, MissionSnapshot};
use bennu_core::types::{MissionConfig, MissionTiming, TimeSpeed};

use crate::explosion::SequencerStep;
use crate::mission::MissionState;
use crate::timer::Timer;
use crate::{outcome, snapshot, trajectory};

pub struct MissionController {
    config: MissionConfig,
    timing: MissionTiming,
    /// Bumped by every reset.
    epoch: u64,
    state: MissionState,
    /// Events not yet handed out in a snapshot.
    events: Vec<MissionEvent>,
}

impl MissionController {
    pub fn new(config: MissionConfig) -> Self {
        Self::with_timing(config, MissionTiming::default())
    }

    pub fn with_timing(config: MissionConfig, timing: MissionTiming) -> Self {
        Self {
            config,
            timing,
            epoch: 0,
            state: MissionState::new(&config, &timing),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn timing(&self) -> &MissionTiming {
        &self.timing
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn phase(&self) -> MissionPhase {
        self.state.phase
    }

    // --- Actions ---

    /// Choose the impact site. Creates a fresh mission around it, so any
    /// earlier pre-launch adjustments are discarded.
    pub fn select_location(&mut self, profile: LocationProfile) -> Result<(), CommandRejected> {
        if self.state.launched() {
            return self.reject(CommandRejected::AlreadyLaunched);
        }

        let id = profile.id;
        self.state = MissionState::new(&self.config, &self.timing);
        self.state.location = Some(profile);
        self.transition(MissionPhase::Armed);
        self.events.push(MissionEvent::LocationSelected { location: id });
        Ok(())
    }

    pub fn set_deflection_force(&mut self, force: f64) -> Result<(), CommandRejected> {
        if self.state.launched() {
            return self.reject(CommandRejected::AlreadyLaunched);
        }
        if self.state.location.is_none() {
            return self.reject(CommandRejected::NoLocation);
        }
        if !(FORCE_MIN..=FORCE_MAX).contains(&force) {
            return self.reject(CommandRejected::ForceOutOfRange {
                force,
                min: FORCE_MIN,
                max: FORCE_MAX,
            });
        }

        self.state.deflection_force = force;
        trace!(force, "deflection force set");
        Ok(())
    }

    pub fn launch(&mut self) -> Result<(), CommandRejected> {
        if self.state.launched() {
            return self.reject(CommandRejected::AlreadyLaunched);
        }
        if self.state.location.is_none() {
            return self.reject(CommandRejected::NoLocation);
        }

        if !self.state.clock.start() {
            return self.reject(CommandRejected::NoTimeRemaining);
        }
        self.transition(MissionPhase::Running);

        let force = self.state.deflection_force;
        info!(
            epoch = self.epoch,
            force,
            predicted_miss_km = trajectory::predicted_miss(&self.config, force),
            "kinetic impactor launched"
        );
        self.events.push(MissionEvent::Launched { force });
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<(), CommandRejected> {
        let time_remaining_years = self.state.time_remaining_years();
        match self.state.phase {
            MissionPhase::Running => {
                self.state.clock.pause();
                self.transition(MissionPhase::Paused);
                self.events.push(MissionEvent::Paused {
                    time_remaining_years,
                });
                Ok(())
            }
            MissionPhase::Paused => {
                self.state.clock.start();
                self.transition(MissionPhase::Running);
                self.events.push(MissionEvent::Resumed {
                    time_remaining_years,
                });
                Ok(())
            }
            MissionPhase::Selecting | MissionPhase::Armed => {
                self.reject(CommandRejected::NotLaunched)
            }
            _ => self.reject(CommandRejected::MissionConcluded),
        }
    }

    /// Takes effect on the next clock tick.
    pub fn set_time_speed(&mut self, multiplier: u32) -> Result<(), CommandRejected> {
        match self.state.phase {
            MissionPhase::Selecting | MissionPhase::Armed => {
                return self.reject(CommandRejected::NotLaunched)
            }
            phase if !phase.is_counting_down() => {
                return self.reject(CommandRejected::MissionConcluded)
            }
            _ => {}
        }

        let speed = match TimeSpeed::try_from(multiplier) {
            Ok(speed) => speed,
            Err(reason) => return self.reject(reason),
        };
        if speed != self.state.time_speed {
            self.state.time_speed = speed;
            debug!(%speed, "time speed changed");
            self.events.push(MissionEvent::SpeedChanged { speed });
        }
        Ok(())
    }

    /// Discard the mission. Every timer is dropped with the old state before
    /// this returns, so nothing from the previous mission can fire again.
    pub fn reset(&mut self) {
        self.state = MissionState::new(&self.config, &self.timing);
        self.epoch += 1;
        self.events.clear();
        self.events.push(MissionEvent::Reset { epoch: self.epoch });
        debug!(epoch = self.epoch, "mission reset");
    }

    // --- Time ---

    /// Feed `dt` of real time. Time is handed to the live timer in steps
    /// that end exactly on each firing, so a timer armed mid-step (the
    /// explosion after expiry) starts from the moment it was armed.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;
        while !remaining.is_zero() {
            let Some(due) = self.next_due() else {
                break;
            };
            let step = due.min(remaining);
            self.step(step);
            remaining -= step;
        }
    }

    /// Real time until the next scheduled firing, if any timer is live.
    pub fn next_due(&self) -> Option<Duration> {
        match self.state.phase {
            MissionPhase::Running => self.state.clock.until_due(),
            MissionPhase::Exploding => self.state.sequencer.until_due(),
            MissionPhase::Settling => self.state.settle_timer.as_ref().and_then(Timer::until_due),
            _ => None,
        }
    }

    fn step(&mut self, step: Duration) {
        match self.state.phase {
            MissionPhase::Running => {
                let speed = self.state.time_speed;
                if let Some(tick) = self.state.clock.advance(step, speed) {
                    trace!(
                        time_remaining_years = tick.time_remaining_years,
                        %speed,
                        "clock tick"
                    );
                    self.events.push(MissionEvent::ClockTick {
                        time_remaining_years: tick.time_remaining_years,
                    });
                    if tick.expired {
                        self.on_clock_expired();
                    }
                }
            }
            MissionPhase::Exploding => match self.state.sequencer.advance(step) {
                Some(SequencerStep::Frame(frame)) => {
                    trace!(frame, "explosion frame");
                    self.events.push(MissionEvent::ExplosionFrame { frame });
                }
                Some(SequencerStep::Finished) => {
                    self.resolve(MissionOutcome::Failure);
                }
                None => {}
            },
            MissionPhase::Settling => {
                let fired = self
                    .state
                    .settle_timer
                    .as_mut()
                    .is_some_and(|timer| timer.accumulate(step));
                if fired {
                    self.state.settle_timer = None;
                    self.resolve(MissionOutcome::Success);
                }
            }
            _ => {}
        }
    }

    fn on_clock_expired(&mut self) {
        let miss_distance_km = trajectory::current_miss(
            &self.config,
            self.state.deflection_force,
            true,
            self.state.time_remaining_years(),
        );
        let outcome = outcome::resolve(&self.config, miss_distance_km);
        self.state.outcome = Some(outcome);

        debug!(miss_distance_km, ?outcome, "countdown expired");
        self.events.push(MissionEvent::ClockExpired {
            miss_distance_km,
            outcome,
        });

        match outcome {
            MissionOutcome::Failure => {
                self.state.sequencer.trigger();
                self.transition(MissionPhase::Exploding);
                self.events.push(MissionEvent::ExplosionFrame {
                    frame: self.state.sequencer.frame(),
                });
            }
            MissionOutcome::Success => {
                self.state.settle_timer = Some(Timer::new(self.timing.success_settle_delay));
                self.transition(MissionPhase::Settling);
            }
        }
    }

    fn resolve(&mut self, outcome: MissionOutcome) {
        let next = match outcome {
            MissionOutcome::Success => MissionPhase::ResolvedSuccess,
            MissionOutcome::Failure => MissionPhase::ResolvedFailure,
        };
        self.transition(next);
        info!(epoch = self.epoch, ?outcome, "mission resolved");
        self.events.push(MissionEvent::Resolved { outcome });
    }

    fn transition(&mut self, next: MissionPhase) {
        let from = self.state.phase;
        debug_assert!(
            from.can_transition_to(next),
            "illegal mission transition {from:?} -> {next:?}"
        );
        debug!(?from, ?next, epoch = self.epoch, "mission phase");
        self.state.phase = next;
    }

    fn reject(&mut self, reason: CommandRejected) -> Result<(), CommandRejected> {
        debug!(%reason, phase = ?self.state.phase, "command rejected");
        self.events.push(MissionEvent::CommandRejected {
            reason: reason.clone(),
        });
        Err(reason)
    }

    // --- Views ---

    /// Snapshot including the pending events, which stay pending.
    pub fn snapshot(&self) -> MissionSnapshot {
        snapshot::build_snapshot(&self.config, &self.state, self.epoch, self.events.clone())
    }

    /// Snapshot that hands out the pending events.
    pub fn take_snapshot(&mut self) -> MissionSnapshot {
        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.config, &self.state, self.epoch, events)
    }

    /// Results summary, available once the mission has resolved.
    pub fn report(&self) -> Option<MissionReport> {
        MissionReport::from_snapshot(&self.snapshot())
    }
}
