//! Mission clock: the countdown from launch to impact.
//!
//! `Idle -> Running` on launch or resume, `Running -> Idle` on pause,
//! `Running -> Expired` when a tick brings the remaining time to zero.
//! The real-time tick period is fixed; the speed multiplier only scales
//! how many simulated years each tick consumes.

use std::time::Duration;

use bennu_core::constants::{BASE_DECREMENT_YEARS, CLOCK_EPSILON_YEARS, CLOCK_TICK_PERIOD};
use bennu_core::enums::ClockPhase;
use bennu_core::types::TimeSpeed;

use crate::timer::Timer;

/// Result of one applied decrement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    pub time_remaining_years: f64,
    pub expired: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissionClock {
    phase: ClockPhase,
    time_remaining_years: f64,
    base_decrement_years: f64,
    tick_period: Duration,
    /// Armed from launch until expiry. Suspended (not dropped) while paused.
    timer: Option<Timer>,
}

impl MissionClock {
    pub fn new(total_years: f64) -> Self {
        Self::with_params(total_years, BASE_DECREMENT_YEARS, CLOCK_TICK_PERIOD)
    }

    pub fn with_params(total_years: f64, base_decrement_years: f64, tick_period: Duration) -> Self {
        Self {
            phase: ClockPhase::Idle,
            time_remaining_years: total_years.max(0.0),
            base_decrement_years,
            tick_period,
            timer: None,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn time_remaining_years(&self) -> f64 {
        self.time_remaining_years
    }

    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    /// Whether a tick timer exists, running or suspended.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Start or resume ticking. A resumed clock continues the partial
    /// period it was paused in.
    pub fn start(&mut self) -> bool {
        if self.phase != ClockPhase::Idle || self.time_remaining_years <= 0.0 {
            return false;
        }
        match self.timer.as_mut() {
            Some(timer) => timer.resume(),
            None => self.timer = Some(Timer::new(self.tick_period)),
        }
        self.phase = ClockPhase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != ClockPhase::Running {
            return false;
        }
        if let Some(timer) = self.timer.as_mut() {
            timer.suspend();
        }
        self.phase = ClockPhase::Idle;
        true
    }

    /// Real time until the next decrement, `None` unless running.
    pub fn until_due(&self) -> Option<Duration> {
        if self.phase != ClockPhase::Running {
            return None;
        }
        self.timer.as_ref().and_then(Timer::until_due)
    }

    /// Feed `step` of real time. Applies at most one decrement, scaled by
    /// the speed in effect at the moment of the tick.
    pub fn advance(&mut self, step: Duration, speed: TimeSpeed) -> Option<ClockTick> {
        if self.phase != ClockPhase::Running {
            return None;
        }
        let timer = self.timer.as_mut()?;
        if !timer.accumulate(step) {
            return None;
        }

        let decrement = self.base_decrement_years * f64::from(speed.multiplier());
        let next = self.time_remaining_years - decrement;
        self.time_remaining_years = if next > CLOCK_EPSILON_YEARS { next } else { 0.0 };

        let expired = self.time_remaining_years == 0.0;
        if expired {
            self.phase = ClockPhase::Expired;
            self.timer = None;
        }

        Some(ClockTick {
            time_remaining_years: self.time_remaining_years,
            expired,
        })
    }
}
