//! Mission loop thread: advances the engine in real time and publishes
//! snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via `mpsc` and are applied as soon as they are received, after the
//! engine has been brought up to the current instant. Between commands the
//! loop wakes once per frame period. When the loop exits, the engine and all
//! of its timers are dropped with it.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use bennu_core::state::MissionSnapshot;
use bennu_sim::engine::{EngineConfig, MissionEngine};

use crate::error::{RuntimeError, RuntimeResult};
use crate::sink::SnapshotSink;
use crate::state::{LoopCommand, SharedSnapshot};

/// Spawns the mission loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_mission_loop<S: SnapshotSink>(
    frame_period: Duration,
    engine_config: EngineConfig,
    sink: S,
    latest_snapshot: SharedSnapshot,
) -> RuntimeResult<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bennu-mission-loop".into())
        .spawn(move || {
            let mut publisher = Publisher::new(sink, latest_snapshot);
            run_mission_loop(frame_period, engine_config, cmd_rx, &mut publisher);
        })
        .map_err(RuntimeError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The mission loop. Runs until Shutdown or channel disconnect.
fn run_mission_loop<S: SnapshotSink>(
    frame_period: Duration,
    engine_config: EngineConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    publisher: &mut Publisher<S>,
) {
    let mut engine = MissionEngine::new(engine_config);
    let mut last_advance = Instant::now();
    let mut next_frame = last_advance + frame_period;

    publisher.publish(engine.take_snapshot());
    debug!(?frame_period, "mission loop started");

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());
        match cmd_rx.recv_timeout(timeout) {
            Ok(LoopCommand::Mission { command, reply }) => {
                // 1. Bring timers up to now so the command lands at the right moment
                let now = Instant::now();
                publisher.publish(engine.tick(now - last_advance));
                last_advance = now;

                // 2. Apply and acknowledge
                let result = engine.apply_command(command);
                let _ = reply.send(result);
                publisher.publish(engine.take_snapshot());
            }
            Ok(LoopCommand::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                debug!("mission loop stopping");
                return;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let now = Instant::now();
                publisher.publish(engine.tick(now - last_advance));
                last_advance = now;

                next_frame += frame_period;
                if now > next_frame + frame_period * 2 {
                    // Too far behind, skip ahead instead of spinning.
                    warn!(behind = ?(now - next_frame), "mission loop fell behind");
                    next_frame = now + frame_period;
                }
            }
        }
    }
}

/// Forwards snapshots to the sink when something changed and keeps the
/// latest one for polling.
struct Publisher<S> {
    sink: S,
    latest_snapshot: SharedSnapshot,
    /// Last published snapshot, without its events.
    last_state: Option<MissionSnapshot>,
}

impl<S: SnapshotSink> Publisher<S> {
    fn new(sink: S, latest_snapshot: SharedSnapshot) -> Self {
        Self {
            sink,
            latest_snapshot,
            last_state: None,
        }
    }

    fn publish(&mut self, snapshot: MissionSnapshot) {
        let mut state = snapshot.clone();
        state.events.clear();

        let changed = !snapshot.events.is_empty() || self.last_state.as_ref() != Some(&state);
        if changed {
            self.sink.publish(&snapshot);
            self.last_state = Some(state);
        }

        match self.latest_snapshot.lock() {
            Ok(mut lock) => *lock = Some(snapshot),
            Err(_) => warn!("latest snapshot lock poisoned; snapshot not stored"),
        }
    }
}
