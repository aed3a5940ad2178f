//! State observer: model prediction corrected by measurement.

use nalgebra::{SMatrix, SVector};

use crate::plant::StateSpacePlant;

/// Evolving state estimate for one mechanism:
///
/// ```text
/// x_pred = A x_hat + B u
/// x_hat' = x_pred + L (y - C x_pred)
/// ```
///
/// `L` is tuned so the estimate converges toward the true state faster
/// than the plant's own dynamics. The estimate dimension always matches
/// the plant's state dimension; the types guarantee it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpaceObserver<const NS: usize, const NI: usize, const NO: usize> {
    plant: StateSpacePlant<NS, NI, NO>,
    l: SMatrix<f64, NS, NO>,
    x_hat: SVector<f64, NS>,
}

impl<const NS: usize, const NI: usize, const NO: usize> StateSpaceObserver<NS, NI, NO> {
    /// Create an observer with a zero initial estimate.
    pub fn new(plant: StateSpacePlant<NS, NI, NO>, l: SMatrix<f64, NS, NO>) -> Self {
        Self {
            plant,
            l,
            x_hat: SVector::zeros(),
        }
    }

    /// Advance the estimate by one tick given the applied command and the
    /// measured output.
    pub fn update(&mut self, u: &SVector<f64, NI>, y: &SVector<f64, NO>) {
        let x_pred = self.plant.predict(&self.x_hat, u);
        let y_pred = self.plant.output(&x_pred);
        self.x_hat = x_pred + self.l * (y - y_pred);
    }

    /// Current state estimate.
    #[inline]
    pub fn x_hat(&self) -> &SVector<f64, NS> {
        &self.x_hat
    }

    /// Overwrite the estimate, e.g. when re-zeroing against an absolute
    /// sensor. Not blended with the model prediction.
    #[inline]
    pub fn set_state(&mut self, x: SVector<f64, NS>) {
        self.x_hat = x;
    }

    /// The underlying plant model.
    #[inline]
    pub fn plant(&self) -> &StateSpacePlant<NS, NI, NO> {
        &self.plant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix1x2, Matrix2, Vector1, Vector2};

    fn position_observer() -> StateSpaceObserver<2, 1, 1> {
        let plant = StateSpacePlant::new(
            Matrix2::new(1.0, 0.005, 0.0, 0.95),
            Vector2::new(0.0, 0.05),
            Matrix1x2::new(1.0, 0.0),
        );
        StateSpaceObserver::new(plant, Vector2::new(0.7, 10.0))
    }

    #[test]
    fn starts_at_zero() {
        let observer = position_observer();
        assert_eq!(observer.x_hat(), &Vector2::zeros());
    }

    #[test]
    fn set_state_overwrites() {
        let mut observer = position_observer();
        observer.set_state(Vector2::new(1.5, -0.5));
        assert_eq!(observer.x_hat(), &Vector2::new(1.5, -0.5));
    }

    #[test]
    fn convergence_from_wrong_initial_estimate() {
        // Constant true state at rest, zero control. The estimate starts
        // wrong and the error must decay toward zero.
        let mut observer = position_observer();
        let truth = Vector2::new(2.0, 0.0);
        let u = Vector1::new(0.0);
        let y = Vector1::new(truth[0]);

        let error_at = |obs: &StateSpaceObserver<2, 1, 1>| (obs.x_hat() - truth).norm();

        let mut checkpoints = Vec::new();
        for tick in 1..=300 {
            observer.update(&u, &y);
            if tick % 50 == 0 {
                checkpoints.push(error_at(&observer));
            }
        }

        // Decaying at every 50-tick checkpoint once past the initial
        // transient, and essentially converged at the end.
        for pair in checkpoints.windows(2) {
            assert!(pair[1] < pair[0], "error not decaying: {checkpoints:?}");
        }
        assert!(checkpoints.last().unwrap() < &1e-9);
    }

    #[test]
    fn tracks_exactly_with_matching_model() {
        // When the estimate starts at the truth and the measurement comes
        // from the same model, prediction and correction agree.
        let mut observer = position_observer();
        let mut truth = Vector2::new(0.0, 0.0);
        let u = Vector1::new(3.0);

        for _ in 0..50 {
            truth = observer.plant().predict(&truth, &u);
            let y = observer.plant().output(&truth);
            observer.update(&u, &y);
            assert!((observer.x_hat() - truth).norm() < 1e-9);
        }
    }
}
