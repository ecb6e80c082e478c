//! Bennu defense host runtime.
//!
//! Runs the mission engine on its own thread at a fixed frame period and
//! hands every state change to a presentation-side `SnapshotSink`.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod runtime;
pub mod sink;
pub mod state;

pub use bennu_core as core;
pub use runtime::MissionRuntime;
