//! TOML gain sets for mechanism loops.
//!
//! Gain matrices are tuned offline and shipped as configuration, not
//! computed on the robot. A [`GainConfig`] is the raw TOML shape; calling
//! [`build`](GainConfig::build) validates every matrix against the loop's
//! compile-time dimensions and produces a ready [`FeedbackLoop`]. A gain
//! set that does not match its mechanism never runs.
//!
//! # TOML Example
//!
//! ```toml
//! a = [[1.0, 0.005], [0.0, 0.95]]
//! b = [[0.0], [0.05]]
//! c = [[1.0, 0.0]]
//! k = [[80.0, 8.0]]
//! l = [[0.7], [10.0]]
//! u_min = [-12.0]
//! u_max = [12.0]
//! ```

use nalgebra::{SMatrix, SVector};
use serde::{Deserialize, Serialize};

use crate::controller::StateSpaceController;
use crate::error::GainError;
use crate::feedback::FeedbackLoop;
use crate::observer::StateSpaceObserver;
use crate::plant::StateSpacePlant;

// Re-exported so callers can `GainConfig::load(path)` without importing
// apex_common themselves.
pub use apex_common::config::{ConfigError, ConfigLoader};

/// One mechanism's gain set as loaded from TOML. Matrices are row-major
/// nested arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainConfig {
    /// State transition matrix rows (NS x NS).
    pub a: Vec<Vec<f64>>,
    /// Input matrix rows (NS x NI).
    pub b: Vec<Vec<f64>>,
    /// Output matrix rows (NO x NS).
    pub c: Vec<Vec<f64>>,
    /// Feedback gain rows (NI x NS).
    pub k: Vec<Vec<f64>>,
    /// Observer gain rows (NS x NO).
    pub l: Vec<Vec<f64>>,
    /// Lower command bounds (NI).
    pub u_min: Vec<f64>,
    /// Upper command bounds (NI).
    pub u_max: Vec<f64>,
}

impl GainConfig {
    /// Validate this gain set against the loop dimensions and build the
    /// feedback loop. Any shape mismatch, non-finite entry or inverted
    /// saturation bound fails construction.
    pub fn build<const NS: usize, const NI: usize, const NO: usize>(
        &self,
    ) -> Result<FeedbackLoop<NS, NI, NO>, GainError> {
        let a = to_matrix::<NS, NS>("A", &self.a)?;
        let b = to_matrix::<NS, NI>("B", &self.b)?;
        let c = to_matrix::<NO, NS>("C", &self.c)?;
        let k = to_matrix::<NI, NS>("K", &self.k)?;
        let l = to_matrix::<NS, NO>("L", &self.l)?;
        let u_min = to_vector::<NI>("u_min", &self.u_min)?;
        let u_max = to_vector::<NI>("u_max", &self.u_max)?;

        let plant = StateSpacePlant::new(a, b, c);
        let controller = StateSpaceController::new(k, u_min, u_max).inspect_err(|e| {
            tracing::error!(error = %e, "rejected gain set");
        })?;
        Ok(FeedbackLoop::new(controller, StateSpaceObserver::new(plant, l)))
    }
}

fn to_matrix<const R: usize, const C: usize>(
    what: &'static str,
    rows: &[Vec<f64>],
) -> Result<SMatrix<f64, R, C>, GainError> {
    let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.len() != R || rows.iter().any(|row| row.len() != C) {
        tracing::error!(what, rows = rows.len(), cols = widest, "gain matrix shape mismatch");
        return Err(GainError::Dimension {
            what,
            expected_rows: R,
            expected_cols: C,
            rows: rows.len(),
            cols: widest,
        });
    }

    for (i, row) in rows.iter().enumerate() {
        for (j, entry) in row.iter().enumerate() {
            if !entry.is_finite() {
                return Err(GainError::NotFinite { what, row: i, col: j });
            }
        }
    }

    Ok(SMatrix::from_fn(|i, j| rows[i][j]))
}

fn to_vector<const R: usize>(what: &'static str, entries: &[f64]) -> Result<SVector<f64, R>, GainError> {
    if entries.len() != R {
        return Err(GainError::Dimension {
            what,
            expected_rows: R,
            expected_cols: 1,
            rows: entries.len(),
            cols: 1,
        });
    }
    for (i, entry) in entries.iter().enumerate() {
        if !entry.is_finite() {
            return Err(GainError::NotFinite { what, row: i, col: 0 });
        }
    }
    Ok(SVector::from_fn(|i, _| entries[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_common::config::{ConfigError, ConfigLoader};
    use std::io::Write;

    const SHOOTER_GAINS: &str = r#"
a = [[1.0, 0.005], [0.0, 0.95]]
b = [[0.0], [0.05]]
c = [[1.0, 0.0]]
k = [[80.0, 8.0]]
l = [[0.7], [10.0]]
u_min = [-12.0]
u_max = [12.0]
"#;

    #[test]
    fn builds_from_toml() {
        let config: GainConfig = toml::from_str(SHOOTER_GAINS).unwrap();
        let mechanism = config.build::<2, 1, 1>().unwrap();

        assert_eq!(mechanism.controller().k()[(0, 0)], 80.0);
        assert_eq!(mechanism.observer().plant().a()[(0, 1)], 0.005);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let mut config: GainConfig = toml::from_str(SHOOTER_GAINS).unwrap();
        config.k = vec![vec![80.0]]; // 1x1, needs 1x2

        let err = config.build::<2, 1, 1>().unwrap_err();
        assert_eq!(
            err,
            GainError::Dimension {
                what: "K",
                expected_rows: 1,
                expected_cols: 2,
                rows: 1,
                cols: 1,
            }
        );
    }

    #[test]
    fn wrong_dimensions_for_loop_are_rejected() {
        // A perfectly valid 2-state gain set cannot build a 3-state loop.
        let config: GainConfig = toml::from_str(SHOOTER_GAINS).unwrap();
        assert!(matches!(
            config.build::<3, 1, 1>(),
            Err(GainError::Dimension { what: "A", .. })
        ));
    }

    #[test]
    fn non_finite_entries_are_rejected() {
        let mut config: GainConfig = toml::from_str(SHOOTER_GAINS).unwrap();
        config.l[1][0] = f64::NAN;

        let err = config.build::<2, 1, 1>().unwrap_err();
        assert_eq!(err, GainError::NotFinite { what: "L", row: 1, col: 0 });
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut config: GainConfig = toml::from_str(SHOOTER_GAINS).unwrap();
        config.u_min = vec![12.0];
        config.u_max = vec![-12.0];

        assert!(matches!(config.build::<2, 1, 1>(), Err(GainError::Bounds { index: 0, .. })));
    }

    #[test]
    fn loads_through_config_loader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SHOOTER_GAINS}").unwrap();

        let config = GainConfig::load(file.path()).unwrap();
        assert!(config.build::<2, 1, 1>().is_ok());

        let missing = GainConfig::load(std::path::Path::new("/nonexistent/gains.toml"));
        assert_eq!(missing.unwrap_err(), ConfigError::FileNotFound);
    }
}
