//! Agent Roster Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
/// Session-scoped state management
///
/// Holds the agent working set, the simulation log, and the context object
/// handlers receive.
pub mod session;
pub mod simulation;
pub mod store;
