//! Reasons an action was refused.
//!
//! Rejections never change mission state. They exist so hosts can log or
//! surface why a control was ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandRejected {
    #[error("mission already launched")]
    AlreadyLaunched,

    #[error("mission not launched")]
    NotLaunched,

    #[error("no impact location selected")]
    NoLocation,

    #[error("deflection force {force} cm/s outside [{min}, {max}]")]
    ForceOutOfRange { force: f64, min: f64, max: f64 },

    #[error("unsupported time speed {multiplier}x")]
    UnsupportedSpeed { multiplier: u32 },

    #[error("countdown already expired")]
    MissionConcluded,

    #[error("countdown has no time remaining")]
    NoTimeRemaining,
}
