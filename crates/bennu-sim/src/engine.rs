//! Mission engine: command-queue front for the controller.
//!
//! `MissionEngine` accepts `MissionCommand`s, applies them at the next
//! tick boundary, advances the controller by the real time elapsed and
//! returns the resulting `MissionSnapshot`. Completely headless, so a
//! mission replays identically from the same command/delta sequence.

use std::collections::VecDeque;
use std::time::Duration;

use bennu_core::commands::MissionCommand;
use bennu_core::enums::MissionPhase;
use bennu_core::error::CommandRejected;
use bennu_core::locations::LocationProfile;
use bennu_core::state::MissionSnapshot;
use bennu_core::types::{MissionConfig, MissionTiming};

use crate::controller::MissionController;

/// Configuration for a new engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineConfig {
    pub mission: MissionConfig,
    pub timing: MissionTiming,
}

pub struct MissionEngine {
    controller: MissionController,
    command_queue: VecDeque<MissionCommand>,
    /// Total real time fed to the engine.
    elapsed: Duration,
}

impl MissionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            controller: MissionController::with_timing(config.mission, config.timing),
            command_queue: VecDeque::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MissionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MissionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately, bypassing the queue.
    pub fn apply_command(&mut self, command: MissionCommand) -> Result<(), CommandRejected> {
        match command {
            MissionCommand::SelectLocation { location } => self
                .controller
                .select_location(LocationProfile::builtin(location)),
            MissionCommand::SetDeflectionForce { force } => {
                self.controller.set_deflection_force(force)
            }
            MissionCommand::Launch => self.controller.launch(),
            MissionCommand::TogglePause => self.controller.toggle_pause(),
            MissionCommand::SetTimeSpeed { multiplier } => {
                self.controller.set_time_speed(multiplier)
            }
            MissionCommand::Reset => {
                self.controller.reset();
                Ok(())
            }
        }
    }

    /// Apply queued commands, advance by `dt` of real time and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: Duration) -> MissionSnapshot {
        self.process_commands();
        self.controller.advance(dt);
        self.elapsed += dt;
        self.controller.take_snapshot()
    }

    /// Snapshot of the current state, handing out pending events.
    pub fn take_snapshot(&mut self) -> MissionSnapshot {
        self.controller.take_snapshot()
    }

    pub fn controller(&self) -> &MissionController {
        &self.controller
    }

    pub fn phase(&self) -> MissionPhase {
        self.controller.phase()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Real time until the controller's next timer firing.
    pub fn next_due(&self) -> Option<Duration> {
        self.controller.next_due()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            // Rejections are recorded as events by the controller.
            let _ = self.apply_command(command);
        }
    }
}
