//! Mission simulation engine for the Bennu defense simulator.
//!
//! Owns the mission state, runs the countdown and explosion timers on
//! caller-supplied real-time deltas, and produces `MissionSnapshot`s for
//! the presentation layer. Never reads a wall clock.

pub mod clock;
pub mod controller;
pub mod engine;
pub mod explosion;
pub mod mission;
pub mod outcome;
pub mod snapshot;
pub mod timer;
pub mod trajectory;

pub use bennu_core as core;
pub use controller::MissionController;
pub use engine::MissionEngine;

#[cfg(test)]
mod tests;
