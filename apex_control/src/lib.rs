//! # Apex Control
//!
//! Generic discrete-time state-space control for closed-loop mechanisms:
//! a linear plant model, a feedback controller with actuator saturation,
//! a state observer, and a fixed-horizon history buffer for latency
//! compensation.
//!
//! Every mechanism instantiates the same small engine with its own
//! compile-time dimensions and tuned gain matrices (supplied as TOML
//! configuration, validated at construction). One [`feedback::FeedbackLoop`]
//! tick computes the saturated actuator command and advances the state
//! estimate; the owning control loop publishes the result through its
//! output queue.
//!
//! All state is owned by the single task that ticks it; nothing here
//! requires synchronization.

pub mod controller;
pub mod error;
pub mod feedback;
pub mod gains;
pub mod history;
pub mod observer;
pub mod plant;

pub use controller::StateSpaceController;
pub use error::{GainError, HistoryError};
pub use feedback::{FeedbackLoop, position_reference};
pub use gains::GainConfig;
pub use history::HistoryBuffer;
pub use observer::StateSpaceObserver;
pub use plant::StateSpacePlant;
