//! Host configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use bennu_core::types::{MissionConfig, MissionTiming};
use bennu_sim::engine::EngineConfig;

use crate::error::{RuntimeError, RuntimeResult};
use crate::logging::LogConfig;

/// Default frame period of the mission loop. Matches the explosion frame
/// period so every explosion frame gets its own snapshot.
pub const DEFAULT_FRAME_PERIOD_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// How often the loop advances the engine when no command arrives.
    pub frame_period_ms: u64,
    pub log: LogConfig,
    pub mission: MissionConfig,
    pub timing: MissionTiming,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_period_ms: DEFAULT_FRAME_PERIOD_MS,
            log: LogConfig::default(),
            mission: MissionConfig::default(),
            timing: MissionTiming::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parse and validate.
    pub fn from_json(json: &str) -> RuntimeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> RuntimeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Rejects mission constants and pacing that would let the countdown
    /// grow, stall or never start.
    pub fn validate(&self) -> RuntimeResult<()> {
        let mission = &self.mission;
        let timing = &self.timing;

        positive("mission.conversion_constant", mission.conversion_constant)?;
        finite("mission.safe_distance_km", mission.safe_distance_km)?;
        finite("mission.initial_miss_km", mission.initial_miss_km)?;
        positive("mission.total_years", mission.total_years)?;
        positive("timing.base_decrement_years", timing.base_decrement_years)?;

        if timing.clock_tick_period.is_zero() {
            return Err(invalid("timing.clock_tick_period", "must be non-zero"));
        }
        if timing.explosion_frame_period.is_zero() {
            return Err(invalid("timing.explosion_frame_period", "must be non-zero"));
        }
        if timing.explosion_frames == 0 {
            return Err(invalid("timing.explosion_frames", "must be at least 1"));
        }
        Ok(())
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_period_ms.max(1))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            mission: self.mission,
            timing: self.timing,
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> RuntimeError {
    RuntimeError::InvalidConfig { field, reason }
}

fn finite(field: &'static str, value: f64) -> RuntimeResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn positive(field: &'static str, value: f64) -> RuntimeResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be greater than zero"))
    }
}
