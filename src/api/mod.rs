//! API module
//!
//! Contains HTTP request handlers for the agent roster, team simulation and
//! option catalog endpoints.

pub mod agents;
pub mod notice;
pub mod options;
pub mod simulation;

// Re-export the notice types for convenience (used by every handler module)
pub use notice::{Notice, NoticeLevel};
