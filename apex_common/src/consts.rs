//! System-wide constants for the apex workspace.
//!
//! Single source of truth for loop timing and queue sizing. Imported by
//! all crates, no duplication permitted.

use std::time::Duration;

/// Control loop period in seconds (200 Hz).
pub const CONTROL_PERIOD_S: f64 = 0.005;

/// Control loop period as a [`Duration`].
pub const CONTROL_PERIOD: Duration = Duration::from_millis(5);

/// Messages retained per topic queue.
pub const QUEUE_DEPTH: usize = 200;

/// Number of power-distribution current channels.
pub const PDP_CHANNELS: usize = 16;
