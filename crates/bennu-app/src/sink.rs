//! Destinations for published snapshots.

use std::sync::mpsc;

use tracing::info;

use bennu_core::enums::MissionPhase;
use bennu_core::state::MissionSnapshot;

/// Receives a snapshot after every mission state change. Called on the
/// mission loop thread, so implementations must not block for long.
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &MissionSnapshot);
}

impl SnapshotSink for mpsc::Sender<MissionSnapshot> {
    fn publish(&mut self, snapshot: &MissionSnapshot) {
        // A dropped receiver just means nobody is watching any more.
        let _ = self.send(snapshot.clone());
    }
}

/// Logs phase changes. Useful when running without a presentation layer.
#[derive(Debug, Default)]
pub struct TracingSink {
    last_phase: Option<(u64, MissionPhase)>,
}

impl SnapshotSink for TracingSink {
    fn publish(&mut self, snapshot: &MissionSnapshot) {
        let key = (snapshot.epoch, snapshot.phase);
        if self.last_phase == Some(key) {
            return;
        }
        self.last_phase = Some(key);
        info!(
            epoch = snapshot.epoch,
            phase = ?snapshot.phase,
            time_remaining_years = snapshot.time_remaining_years,
            current_miss_km = snapshot.current_miss_km,
            "mission phase"
        );
    }
}
