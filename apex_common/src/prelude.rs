//! Prelude module for common re-exports.
//!
//! Consumers can do `use apex_common::prelude::*;` and get the most
//! important types without listing individual paths.

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel};

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{CONTROL_PERIOD, CONTROL_PERIOD_S, QUEUE_DEPTH};

// ─── Messages ───────────────────────────────────────────────────────
pub use crate::msgs::shared::{DriverStationStatus, PdpStatus, RobotMode, VisionGoal, VisionStatus};
