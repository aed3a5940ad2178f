//! Apex Common Library
//!
//! Shared constants, configuration loading and message snapshot types for
//! all apex workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Loop timing and queue sizing constants
//! - [`config`] - Configuration loading traits and types
//! - [`msgs`] - Fixed-size topic payload types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use apex_common::prelude::*;
//! use apex_common::msgs::shared::DriverStationStatus;
//!
//! let status = DriverStationStatus::default();
//! assert_eq!(status.mode(), RobotMode::Disabled);
//! ```

pub mod config;
pub mod consts;
pub mod msgs;
pub mod prelude;
