//! Core types and definitions for the Bennu defense simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! constants, commands, events, location profiles and state snapshots.
//! It has no dependency on any runtime or presentation framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod locations;
pub mod state;
pub mod types;
