//! Runtime handle: the presentation layer's entry point.
//!
//! Each action is delivered to the mission loop and waits for the loop to
//! apply it, so when a call returns the mission state already reflects it.
//! Dropping the handle stops the loop and joins its thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::warn;

use bennu_core::commands::MissionCommand;
use bennu_core::enums::LocationId;
use bennu_core::state::MissionSnapshot;

use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::game_loop;
use crate::sink::SnapshotSink;
use crate::state::{LoopCommand, SharedSnapshot};

pub struct MissionRuntime {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    /// `None` once stopped.
    handle: Option<JoinHandle<()>>,
}

impl MissionRuntime {
    /// Start a mission loop publishing to `sink`. Fails without spawning
    /// anything if `config` does not validate.
    pub fn start<S: SnapshotSink>(config: &RuntimeConfig, sink: S) -> RuntimeResult<Self> {
        config.validate()?;
        let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
        let (command_tx, handle) = game_loop::spawn_mission_loop(
            config.frame_period(),
            config.engine_config(),
            sink,
            latest_snapshot.clone(),
        )?;

        Ok(Self {
            command_tx,
            latest_snapshot,
            handle: Some(handle),
        })
    }

    /// Deliver a command and wait until the loop has applied it.
    pub fn send(&self, command: MissionCommand) -> RuntimeResult<()> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.command_tx
            .send(LoopCommand::Mission {
                command,
                reply: reply_tx,
            })
            .map_err(|_| RuntimeError::LoopStopped)?;

        reply_rx.recv().map_err(|_| RuntimeError::LoopStopped)??;
        Ok(())
    }

    pub fn select_location(&self, location: LocationId) -> RuntimeResult<()> {
        self.send(MissionCommand::SelectLocation { location })
    }

    pub fn set_deflection_force(&self, force: f64) -> RuntimeResult<()> {
        self.send(MissionCommand::SetDeflectionForce { force })
    }

    pub fn launch(&self) -> RuntimeResult<()> {
        self.send(MissionCommand::Launch)
    }

    pub fn toggle_pause(&self) -> RuntimeResult<()> {
        self.send(MissionCommand::TogglePause)
    }

    pub fn set_time_speed(&self, multiplier: u32) -> RuntimeResult<()> {
        self.send(MissionCommand::SetTimeSpeed { multiplier })
    }

    /// Discard the current mission. Its timers are gone when this returns.
    pub fn reset(&self) -> RuntimeResult<()> {
        self.send(MissionCommand::Reset)
    }

    /// Latest snapshot (for polling / initial state).
    pub fn latest_snapshot(&self) -> RuntimeResult<Option<MissionSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| RuntimeError::SnapshotPoisoned)?;
        Ok(lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the loop and wait for its thread to exit.
    pub fn shutdown(mut self) -> RuntimeResult<()> {
        self.stop()
    }

    fn stop(&mut self) -> RuntimeResult<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // The loop may already be gone; joining is what matters.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        handle.join().map_err(|_| RuntimeError::LoopPanicked)
    }
}

impl Drop for MissionRuntime {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!(%err, "mission loop did not stop cleanly");
        }
    }
}
