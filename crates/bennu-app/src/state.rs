//! State shared between the runtime handle and the mission loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bennu_core::commands::MissionCommand;
use bennu_core::error::CommandRejected;
use bennu_core::state::MissionSnapshot;

/// Latest snapshot, for synchronous polling. `None` until the loop starts.
pub type SharedSnapshot = Arc<Mutex<Option<MissionSnapshot>>>;

/// Messages from the runtime handle to the mission loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Apply a mission command and report whether it was accepted.
    Mission {
        command: MissionCommand,
        reply: mpsc::Sender<Result<(), CommandRejected>>,
    },
    /// Stop the loop, dropping the engine and every timer it owns.
    Shutdown,
}
