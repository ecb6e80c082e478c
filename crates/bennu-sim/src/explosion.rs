//! Explosion sequencer: the fixed-length impact animation.
//!
//! Runs at real-time pace regardless of the time speed multiplier. Frames
//! go 1..=terminal, one per frame period. The terminal frame is held for one
//! more frame period, then a single settle delay elapses before the
//! sequencer reports `Finished`.

use std::time::Duration;

use bennu_core::constants::{EXPLOSION_FRAMES, EXPLOSION_FRAME_PERIOD, EXPLOSION_SETTLE_DELAY};

use crate::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerStep {
    /// Advanced to this frame.
    Frame(u32),
    /// Settle delay after the terminal frame has elapsed.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionSequencer {
    frame: u32,
    terminal_frame: u32,
    frame_period: Duration,
    settle_delay: Duration,
    frame_timer: Option<Timer>,
    settle_timer: Option<Timer>,
    finished: bool,
}

impl Default for ExplosionSequencer {
    fn default() -> Self {
        Self::with_params(EXPLOSION_FRAMES, EXPLOSION_FRAME_PERIOD, EXPLOSION_SETTLE_DELAY)
    }
}

impl ExplosionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(terminal_frame: u32, frame_period: Duration, settle_delay: Duration) -> Self {
        Self {
            frame: 0,
            terminal_frame: terminal_frame.max(1),
            frame_period,
            settle_delay,
            frame_timer: None,
            settle_timer: None,
            finished: false,
        }
    }

    /// Current frame, 0 while inactive.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn terminal_frame(&self) -> u32 {
        self.terminal_frame
    }

    /// Frame increments needed to reach the terminal frame once triggered.
    pub fn frame_steps(&self) -> u32 {
        self.terminal_frame - 1
    }

    /// Total real time from trigger to `Finished`: every frame step, one
    /// hold period at the terminal frame, then the settle delay.
    pub fn total_duration(&self) -> Duration {
        self.frame_period * (self.frame_steps() + 1) + self.settle_delay
    }

    pub fn is_active(&self) -> bool {
        self.frame > 0 && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether any timer is still armed.
    pub fn is_armed(&self) -> bool {
        self.frame_timer.is_some() || self.settle_timer.is_some()
    }

    /// Start the sequence at frame 1. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.frame != 0 {
            return false;
        }
        self.frame = 1;
        self.frame_timer = Some(Timer::new(self.frame_period));
        true
    }

    pub fn until_due(&self) -> Option<Duration> {
        self.frame_timer
            .as_ref()
            .or(self.settle_timer.as_ref())
            .and_then(Timer::until_due)
    }

    /// Feed `step` of real time. At most one frame or completion per call.
    pub fn advance(&mut self, step: Duration) -> Option<SequencerStep> {
        if let Some(timer) = self.frame_timer.as_mut() {
            if !timer.accumulate(step) {
                return None;
            }
            if self.frame >= self.terminal_frame {
                // Hold period at the terminal frame is over.
                self.frame_timer = None;
                self.settle_timer = Some(Timer::new(self.settle_delay));
                return None;
            }
            self.frame += 1;
            return Some(SequencerStep::Frame(self.frame));
        }

        if let Some(timer) = self.settle_timer.as_mut() {
            if timer.accumulate(step) {
                self.settle_timer = None;
                self.finished = true;
                return Some(SequencerStep::Finished);
            }
        }
        None
    }
}
