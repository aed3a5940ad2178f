//! # Apex Queues
//!
//! The communication substrate of the robot: a bounded, allocation-free
//! publish/subscribe layer carrying typed snapshots between independently
//! scheduled control loops.
//!
//! ## Architecture
//!
//! - [`payload`] - Bounded, stack-resident message snapshots
//! - [`queue`] - Single-writer, multi-reader lock-free message rings
//! - [`registry`] - Process-wide topic → queue binding
//!
//! ## Zero-Allocation Hot Path
//!
//! All queue storage is allocated once when the registry initializes.
//! `write`, `read_next` and `read_last` perform no heap allocation, never
//! block, and are safe against concurrent readers without locks: slots are
//! immutable once committed and guarded by an odd/even sequence tag.

pub mod payload;
pub mod queue;
pub mod registry;

pub use payload::{Payload, PayloadError, Plain};
pub use queue::{MessageQueue, QueueReader};
pub use registry::QueueRegistry;
