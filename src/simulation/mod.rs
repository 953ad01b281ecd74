//! Team simulation module
//!
//! This module provides the append-only simulation transcript and the
//! awaitable work boundary the run loop drives each selected agent through.

pub mod log;
pub mod runner;

pub use log::{SimulationLog, RUN_END_MARKER, RUN_START_MARKER};
pub use runner::{work_block, DelaySimulator, SimulationError, WorkSimulator};
