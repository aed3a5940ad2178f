//! Error types for the control engine.

use std::time::Duration;
use thiserror::Error;

/// Errors from building a control loop out of configured gain matrices.
///
/// All of these are configuration errors: construction fails and the
/// faulty loop never runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GainError {
    /// A configured matrix does not match the loop's dimensions.
    #[error("{what}: expected {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    Dimension {
        /// Which matrix was malformed.
        what: &'static str,
        /// Required row count.
        expected_rows: usize,
        /// Required column count.
        expected_cols: usize,
        /// Configured row count.
        rows: usize,
        /// Configured column count (widest row).
        cols: usize,
    },

    /// A configured entry is NaN or infinite.
    #[error("{what}: entry ({row}, {col}) is not finite")]
    NotFinite {
        /// Which matrix held the entry.
        what: &'static str,
        /// Entry row.
        row: usize,
        /// Entry column.
        col: usize,
    },

    /// Saturation bounds are inverted for one command component.
    #[error("saturation bounds inverted at component {index}: min {min} > max {max}")]
    Bounds {
        /// Command component index.
        index: usize,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

/// History lookback failure.
///
/// Recoverable: the caller asked further back than the buffer retains and
/// decides for itself whether that is fatal.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Requested duration exceeds the retained window.
    #[error("unrecorded history: requested {requested:?} exceeds retention {retention:?}")]
    Unrecorded {
        /// Requested lookback duration.
        requested: Duration,
        /// Maximum answerable duration.
        retention: Duration,
    },
}
